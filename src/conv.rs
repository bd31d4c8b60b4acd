// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions between decimals and the integer types.
//!
//! Conversions from integers that always fit within the magnitude bound are
//! `From` impls; conversions from `i128`, `u128`, and [`BigInt`] must check
//! the bound and are `TryFrom`. Conversions from a decimal back to a
//! primitive integer are exact: they fail on a nonzero fractional part
//! rather than round (the rounding conversions are
//! [`Decimal::to_i128`] and [`Decimal::to_bigint`]).

use std::convert::TryFrom;

use num_bigint::{BigInt, Sign};

use crate::decimal::{range_error, Decimal};
use crate::error::{ArithmeticError, TryFromDecimalError};

/// Converts a signed integer to a decimal, exactly.
macro_rules! from_signed_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Decimal {
                fn from(n: $t) -> Decimal {
                    Decimal {
                        negative: n < 0,
                        int: u128::from(n.unsigned_abs()),
                        frac: 0,
                    }
                }
            }
        )*
    };
}

/// Like `from_signed_int!` but for unsigned integers.
macro_rules! from_unsigned_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Decimal {
                fn from(n: $t) -> Decimal {
                    Decimal {
                        negative: false,
                        int: u128::from(n),
                        frac: 0,
                    }
                }
            }
        )*
    };
}

from_signed_int!(i8, i16, i32, i64);
from_unsigned_int!(u8, u16, u32, u64);

impl TryFrom<i128> for Decimal {
    type Error = ArithmeticError;

    fn try_from(n: i128) -> Result<Decimal, ArithmeticError> {
        Decimal::new(n < 0, n.unsigned_abs(), 0)
    }
}

impl TryFrom<u128> for Decimal {
    type Error = ArithmeticError;

    fn try_from(n: u128) -> Result<Decimal, ArithmeticError> {
        Decimal::new(false, n, 0)
    }
}

impl TryFrom<&BigInt> for Decimal {
    type Error = ArithmeticError;

    fn try_from(n: &BigInt) -> Result<Decimal, ArithmeticError> {
        let negative = n.sign() == Sign::Minus;
        let int = u128::try_from(n.magnitude()).map_err(|_| range_error(negative))?;
        Decimal::new(negative, int, 0)
    }
}

impl TryFrom<BigInt> for Decimal {
    type Error = ArithmeticError;

    fn try_from(n: BigInt) -> Result<Decimal, ArithmeticError> {
        Decimal::try_from(&n)
    }
}

/// Converts a decimal to a primitive integer, exactly.
///
/// Going through `i128` handles every target: the integer magnitude bound
/// is below `i128::MAX`, and the target's own range check happens last.
macro_rules! try_from_decimal {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<Decimal> for $t {
                type Error = TryFromDecimalError;

                fn try_from(n: Decimal) -> Result<$t, TryFromDecimalError> {
                    if !n.is_integer() {
                        return Err(TryFromDecimalError);
                    }
                    let m = n.int as i128;
                    let m = if n.is_negative() { -m } else { m };
                    <$t>::try_from(m).map_err(|_| TryFromDecimalError)
                }
            }
        )*
    };
}

try_from_decimal!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
