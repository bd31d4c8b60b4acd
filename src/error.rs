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

use std::error::Error;
use std::fmt;

/// An error indicating that an arithmetic operation cannot represent its
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The result's magnitude exceeds the maximum representable value,
    /// [`Decimal::INFINITY`](crate::Decimal::INFINITY).
    Overflow,
    /// The result's magnitude exceeds the minimum representable value,
    /// [`Decimal::NEG_INFINITY`](crate::Decimal::NEG_INFINITY).
    Underflow,
    /// The divisor's magnitude is exactly zero.
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithmeticError::Overflow => {
                f.write_str("decimal cannot exceed the maximum representable value")
            }
            ArithmeticError::Underflow => {
                f.write_str("decimal cannot be smaller than the minimum representable value")
            }
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl Error for ArithmeticError {}

/// An error indicating that a string is not a valid decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// The text contains a character that has no place in a decimal number,
    /// or arranges its characters in an invalid way (e.g. two decimal
    /// separators, a malformed exponent, no digits at all).
    InvalidSyntax,
    /// The text is a well-formed decimal number whose magnitude falls
    /// outside of the representable range.
    OutOfRange(ArithmeticError),
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseDecimalError::InvalidSyntax => f.write_str("invalid decimal syntax"),
            ParseDecimalError::OutOfRange(e) => e.fmt(f),
        }
    }
}

impl Error for ParseDecimalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseDecimalError::InvalidSyntax => None,
            ParseDecimalError::OutOfRange(e) => Some(e),
        }
    }
}

impl From<ArithmeticError> for ParseDecimalError {
    fn from(e: ArithmeticError) -> ParseDecimalError {
        ParseDecimalError::OutOfRange(e)
    }
}

/// An error indicating that a decimal value cannot be cast to a primitive
/// integer type.
///
/// Causes for this failure include calling cast functions on values:
/// - With a nonzero fractional part
/// - That are negative when the target is unsigned
/// - Whose integer magnitude doesn't fit into the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromDecimalError;

impl fmt::Display for TryFromDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("decimal cannot be expressed in target primitive type")
    }
}

impl Error for TryFromDecimalError {}
