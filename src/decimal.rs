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

use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use paste::paste;
use static_assertions::{const_assert, const_assert_eq};

use crate::error::{ArithmeticError, ParseDecimalError};

/// The denominator of the fractional field, 10<sup>18</sup>.
pub(crate) const SCALE: u64 = 1_000_000_000_000_000_000;

/// The bound on the integer magnitude, 10<sup>36</sup>.
pub(crate) const MAX_MAGNITUDE: u128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

// The integer bound is exactly the square of the fractional scale, so the
// scaled intermediates in multiplication and division line up digit for
// digit.
const_assert_eq!((SCALE as u128) * (SCALE as u128), MAX_MAGNITUDE);
// Two fractional fields must sum without overflowing, for addition's carry.
const_assert!(SCALE <= u64::MAX / 2);

const fn pow10(n: u32) -> u64 {
    let mut p = 1;
    let mut i = 0;
    while i < n {
        p *= 10;
        i += 1;
    }
    p
}

/// A fixed-precision, arbitrary-magnitude signed decimal number.
///
/// A `Decimal` carries exactly eighteen fractional decimal digits and an
/// integer magnitude of up to 10<sup>36</sup>; the values at that bound are
/// [`Decimal::INFINITY`] and [`Decimal::NEG_INFINITY`]. Excess fractional
/// precision rounds half-up, with carries cascading into the integer part.
/// Zero is always non-negative: no operation produces a negative zero.
///
/// Construction happens through [`FromStr`], the `From`/`TryFrom` integer
/// conversions, or an arithmetic operation; every result re-validates the
/// magnitude bound, so there is no path to an out-of-range value.
///
/// The `checked_*` methods report unrepresentable results as
/// [`ArithmeticError`]s. The overloaded operators panic on the same
/// conditions, mirroring the standard library's integer operators:
///
/// ```
/// use xdec::Decimal;
///
/// let a = Decimal::from(1);
/// let b = Decimal::from(2);
/// assert_eq!(a + b, Decimal::from(3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    /// Whether the value is negative. Never set when the magnitude is zero.
    pub(crate) negative: bool,
    /// The whole-number magnitude, in `[0, MAX_MAGNITUDE]`.
    pub(crate) int: u128,
    /// The fractional magnitude in units of 10<sup>-18</sup>, in
    /// `[0, SCALE)`.
    pub(crate) frac: u64,
}

impl Decimal {
    /// The number of fractional decimal digits every value carries.
    pub const PRECISION: u32 = 18;

    /// The value that represents zero.
    pub const ZERO: Decimal = Decimal {
        negative: false,
        int: 0,
        frac: 0,
    };

    /// The value that represents one.
    pub const ONE: Decimal = Decimal {
        negative: false,
        int: 1,
        frac: 0,
    };

    /// The largest representable value, with an integer magnitude of
    /// 10<sup>36</sup>.
    ///
    /// Unlike the IEEE 754 infinities this is an ordinary value: arithmetic
    /// may produce it exactly, and exceeding it is an error rather than a
    /// saturation.
    #[doc(alias = "INF")]
    #[doc(alias = "POSITIVE_INFINITY")]
    pub const INFINITY: Decimal = Decimal {
        negative: false,
        int: MAX_MAGNITUDE,
        frac: 0,
    };

    /// The smallest representable value, the negation of
    /// [`Decimal::INFINITY`].
    #[doc(alias = "NEG_INF")]
    #[doc(alias = "NEGATIVE_INFINITY")]
    pub const NEG_INFINITY: Decimal = Decimal {
        negative: true,
        int: MAX_MAGNITUDE,
        frac: 0,
    };

    /// Euler's number (e), rounded to eighteen fractional digits.
    #[doc(alias = "EULER")]
    pub const E: Decimal = Decimal {
        negative: false,
        int: 2,
        frac: 718_281_828_459_045_235,
    };

    /// Archimedes' constant (π), rounded to eighteen fractional digits.
    pub const PI: Decimal = Decimal {
        negative: false,
        int: 3,
        frac: 141_592_653_589_793_238,
    };

    /// The natural logarithm of two, rounded to eighteen fractional digits.
    pub const LN_2: Decimal = Decimal {
        negative: false,
        int: 0,
        frac: 693_147_180_559_945_309,
    };

    /// The natural logarithm of ten, rounded to eighteen fractional digits.
    pub const LN_10: Decimal = Decimal {
        negative: false,
        int: 2,
        frac: 302_585_092_994_045_684,
    };

    /// Assembles a value from its sign and magnitudes, enforcing the
    /// magnitude bound and normalizing the sign of zero.
    ///
    /// Every operation that produces a new value funnels through here.
    pub(crate) fn new(negative: bool, int: u128, frac: u64) -> Result<Decimal, ArithmeticError> {
        debug_assert!(frac < SCALE);
        if int > MAX_MAGNITUDE || (int == MAX_MAGNITUDE && frac != 0) {
            return Err(range_error(negative));
        }
        Ok(Decimal {
            negative: negative && (int != 0 || frac != 0),
            int,
            frac,
        })
    }

    /// Reports whether the value is non-negative.
    ///
    /// This is the stored sign flag: zero reports as positive.
    pub fn is_positive(&self) -> bool {
        !self.negative
    }

    /// Reports whether the value is negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Reports whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.int == 0 && self.frac == 0
    }

    /// Reports whether all eighteen fractional digits are zero.
    pub fn is_integer(&self) -> bool {
        self.frac == 0
    }

    /// Reports whether the value sits at the magnitude bound, i.e. whether
    /// it is [`Decimal::INFINITY`] or [`Decimal::NEG_INFINITY`].
    pub fn is_infinite(&self) -> bool {
        self.int == MAX_MAGNITUDE
    }

    /// Computes the absolute value.
    pub fn abs(self) -> Decimal {
        Decimal {
            negative: false,
            ..self
        }
    }

    /// Returns a value with the magnitude of `self` and the sign of `sign`.
    ///
    /// A zero magnitude stays non-negative regardless of `sign`.
    pub fn copysign(self, sign: Decimal) -> Decimal {
        Decimal {
            negative: sign.negative && !self.is_zero(),
            ..self
        }
    }

    /// Discards the fractional part, rounding toward zero.
    pub fn trunc(self) -> Decimal {
        Decimal {
            negative: self.negative && self.int != 0,
            int: self.int,
            frac: 0,
        }
    }

    /// Rounds toward positive infinity to a whole number.
    ///
    /// This never fails: a carry at the magnitude bound can only occur when
    /// the fraction is already zero.
    pub fn ceil(self) -> Decimal {
        if !self.negative && self.frac != 0 {
            Decimal {
                negative: false,
                int: self.int + 1,
                frac: 0,
            }
        } else {
            self.trunc()
        }
    }

    /// Rounds toward negative infinity to a whole number.
    pub fn floor(self) -> Decimal {
        if self.negative && self.frac != 0 {
            Decimal {
                negative: true,
                int: self.int + 1,
                frac: 0,
            }
        } else {
            self.trunc()
        }
    }

    /// Rounds to a whole number, half-up on the magnitude: the integer part
    /// is incremented exactly when the first fractional digit is five or
    /// greater.
    pub fn round(self) -> Decimal {
        let int = self.round_magnitude();
        Decimal {
            negative: self.negative && int != 0,
            int,
            frac: 0,
        }
    }

    /// The integer magnitude after half-up rounding on the first fractional
    /// digit. Shared by `round` and the integer conversions.
    fn round_magnitude(&self) -> u128 {
        if self.frac / (SCALE / 10) >= 5 {
            self.int + 1
        } else {
            self.int
        }
    }

    /// The total magnitude in units of 10<sup>-18</sup>, for the scaled
    /// intermediates of multiplication and division.
    fn units(&self) -> BigUint {
        BigUint::from(self.int) * SCALE + self.frac
    }

    fn from_units(negative: bool, units: BigUint) -> Result<Decimal, ArithmeticError> {
        let scale = BigUint::from(SCALE);
        let int = &units / &scale;
        let frac = units % scale;
        let int = u128::try_from(&int).map_err(|_| range_error(negative))?;
        let frac = u64::try_from(&frac).expect("remainder by SCALE fits in u64");
        Decimal::new(negative, int, frac)
    }

    fn magnitude(&self) -> (u128, u64) {
        (self.int, self.frac)
    }

    /// Adds `rhs` to `self`, or reports that the sum is unrepresentable.
    ///
    /// Magnitudes of like sign add with the fractional carry propagating
    /// into the integer part; magnitudes of differing sign subtract the
    /// smaller from the larger, which keeps its sign.
    pub fn checked_add(self, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
        if self.negative == rhs.negative {
            let frac = self.frac + rhs.frac;
            let carry = u128::from(frac / SCALE);
            Decimal::new(self.negative, self.int + rhs.int + carry, frac % SCALE)
        } else if self.magnitude() >= rhs.magnitude() {
            let (int, frac) = if self.frac >= rhs.frac {
                (self.int - rhs.int, self.frac - rhs.frac)
            } else {
                (self.int - rhs.int - 1, self.frac + SCALE - rhs.frac)
            };
            Decimal::new(self.negative, int, frac)
        } else {
            rhs.checked_add(self)
        }
    }

    /// Subtracts `rhs` from `self`, or reports that the difference is
    /// unrepresentable.
    pub fn checked_sub(self, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
        self.checked_add(-rhs)
    }

    /// Multiplies `self` by `rhs`, or reports that the product is
    /// unrepresentable.
    ///
    /// The product is computed exactly and then rounded half-up to eighteen
    /// fractional digits.
    pub fn checked_mul(self, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
        let units = div_round_half_up(self.units() * rhs.units(), &BigUint::from(SCALE));
        Decimal::from_units(self.negative != rhs.negative, units)
    }

    /// Divides `self` by `rhs`, or reports that the quotient is
    /// unrepresentable or the divisor zero.
    ///
    /// The dividend is scaled by 10<sup>18</sup> and divided exactly, with
    /// the remainder rounded half-up into the last digit.
    pub fn checked_div(self, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let units = div_round_half_up(self.units() * SCALE, &rhs.units());
        Decimal::from_units(self.negative != rhs.negative, units)
    }

    /// Computes the multiplicative inverse `1 / self`.
    ///
    /// Inherits the contract of [`Decimal::checked_div`], including the
    /// division-by-zero failure.
    pub fn checked_inv(self) -> Result<Decimal, ArithmeticError> {
        Decimal::ONE.checked_div(self)
    }

    /// Converts to an `i128`, rounding half-up on the magnitude's first
    /// fractional digit.
    pub fn to_i128(&self) -> i128 {
        let m = self.round_magnitude() as i128;
        if self.negative {
            -m
        } else {
            m
        }
    }

    /// Converts to a [`BigInt`], rounding half-up on the magnitude's first
    /// fractional digit.
    pub fn to_bigint(&self) -> BigInt {
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, BigUint::from(self.round_magnitude()))
    }

    /// Renders the value rounded to a whole number, with no fractional part
    /// and no sign on zero.
    ///
    /// ```
    /// use xdec::Decimal;
    ///
    /// let d: Decimal = "-0.4".parse().unwrap();
    /// assert_eq!(d.to_integer_string(), "0");
    /// ```
    pub fn to_integer_string(&self) -> String {
        let m = self.round_magnitude();
        if self.negative && m != 0 {
            format!("-{}", m)
        } else {
            m.to_string()
        }
    }

    /// Reports whether `self` is greater than `rhs`. Spelled-out alias for
    /// `self > rhs`.
    pub fn greater_than(&self, rhs: &Decimal) -> bool {
        self > rhs
    }

    /// Reports whether `self` is greater than or equal to `rhs`.
    /// Spelled-out alias for `self >= rhs`.
    pub fn greater_than_or_equal(&self, rhs: &Decimal) -> bool {
        self >= rhs
    }

    /// Reports whether `self` is less than `rhs`. Spelled-out alias for
    /// `self < rhs`.
    pub fn less_than(&self, rhs: &Decimal) -> bool {
        self < rhs
    }

    /// Reports whether `self` is less than or equal to `rhs`. Spelled-out
    /// alias for `self <= rhs`.
    pub fn less_than_or_equal(&self, rhs: &Decimal) -> bool {
        self <= rhs
    }
}

pub(crate) fn range_error(negative: bool) -> ArithmeticError {
    if negative {
        ArithmeticError::Underflow
    } else {
        ArithmeticError::Overflow
    }
}

/// Divides `n` by `d`, rounding the quotient half-up: the last retained
/// digit is incremented exactly when twice the remainder reaches the
/// divisor.
fn div_round_half_up(n: BigUint, d: &BigUint) -> BigUint {
    let q = &n / d;
    let r = n - &q * d;
    if r * 2u32 >= *d {
        q + 1u32
    } else {
        q
    }
}

/// Rounds a fractional digit string to the eighteen-digit field, half-up on
/// the first cut digit. Returns the carry into the integer part (zero or
/// one) and the field's numerator.
fn round_fraction(digits: &[u8]) -> (u128, u64) {
    let precision = Decimal::PRECISION as usize;
    if digits.len() <= precision {
        let frac = fold_digits(digits);
        (0, frac * pow10((precision - digits.len()) as u32))
    } else {
        let mut frac = fold_digits(&digits[..precision]);
        if digits[precision] >= b'5' {
            frac += 1;
        }
        if frac == SCALE {
            (1, 0)
        } else {
            (0, frac)
        }
    }
}

fn fold_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |acc, &b| acc * 10 + u64::from(b - b'0'))
}

/// Rewrites scientific notation into plain positional notation by shifting
/// the mantissa's decimal point `exponent` places.
fn rewrite_exponent(mantissa: &str, exponent: i64) -> Result<String, ParseDecimalError> {
    let (int_digits, frac_digits) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let digits = [int_digits, frac_digits].concat();
    if digits.is_empty() {
        return Err(ParseDecimalError::InvalidSyntax);
    }
    let point = (int_digits.len() as i64).saturating_add(exponent);
    if point <= 0 {
        let zeros = point.unsigned_abs() as usize;
        let mut s = String::with_capacity(digits.len() + zeros + 2);
        s.push_str("0.");
        for _ in 0..zeros {
            s.push('0');
        }
        s.push_str(&digits);
        Ok(s)
    } else if point as usize >= digits.len() {
        let mut s = digits;
        while s.len() < point as usize {
            s.push('0');
        }
        Ok(s)
    } else {
        Ok(format!(
            "{}.{}",
            &digits[..point as usize],
            &digits[point as usize..]
        ))
    }
}

/// Rewrites locale separators and scientific notation into canonical
/// `"<digits>.<digits>"` text. The input must not carry a sign.
fn normalize(s: &str) -> Result<Cow<'_, str>, ParseDecimalError> {
    let s = if s.contains(',') {
        Cow::Owned(s.replacen(',', ".", 1))
    } else {
        Cow::Borrowed(s)
    };
    match s.find(|c| c == 'e' || c == 'E') {
        None => Ok(s),
        Some(at) => {
            let exponent = s[at + 1..]
                .parse::<i32>()
                .map_err(|_| ParseDecimalError::InvalidSyntax)?;
            rewrite_exponent(&s[..at], i64::from(exponent)).map(Cow::Owned)
        }
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
        if !s.is_ascii() {
            return Err(ParseDecimalError::InvalidSyntax);
        }
        let (negative, magnitude) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let text = normalize(magnitude)?;

        // Syntax is checked in full before any magnitude concern.
        let mut dots = 0;
        let mut digits = 0;
        for c in text.chars() {
            match c {
                '.' => dots += 1,
                '0'..='9' => digits += 1,
                _ => return Err(ParseDecimalError::InvalidSyntax),
            }
        }
        if dots > 1 || digits == 0 {
            return Err(ParseDecimalError::InvalidSyntax);
        }

        let (int_src, frac_src) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (&*text, ""),
        };
        let int: u128 = if int_src.is_empty() {
            0
        } else {
            // All characters are digits, so failure here means the
            // magnitude cannot fit even before the bound check.
            int_src.parse().map_err(|_| range_error(negative))?
        };
        let (carry, frac) = round_fraction(frac_src.as_bytes());
        let int = int.checked_add(carry).ok_or_else(|| range_error(negative))?;
        Ok(Decimal::new(negative, int, frac)?)
    }
}

impl Default for Decimal {
    fn default() -> Decimal {
        Decimal::ZERO
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}.{:018}", self.int, self.frac)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude().cmp(&other.magnitude()),
            (true, true) => other.magnitude().cmp(&self.magnitude()),
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal {
            negative: !self.negative && !self.is_zero(),
            ..self
        }
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $verb:literal) => {
        paste! {
            impl $trait for Decimal {
                type Output = Decimal;

                fn $method(self, rhs: Decimal) -> Decimal {
                    match self.[<checked_ $method>](rhs) {
                        Ok(d) => d,
                        Err(ArithmeticError::DivisionByZero) => {
                            panic!(concat!("attempt to ", $verb, " by zero"))
                        }
                        Err(_) => panic!(concat!("attempt to ", $verb, " with overflow")),
                    }
                }
            }

            impl [<$trait Assign>] for Decimal {
                fn [<$method _assign>](&mut self, rhs: Decimal) {
                    *self = (*self).$method(rhs);
                }
            }
        }
    };
}

impl_binop!(Add, add, "add");
impl_binop!(Sub, sub, "subtract");
impl_binop!(Mul, mul, "multiply");
impl_binop!(Div, div, "divide");

impl Sum for Decimal {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Decimal>,
    {
        iter.fold(Decimal::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Decimal>,
    {
        iter.copied().sum()
    }
}

impl Product for Decimal {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Decimal>,
    {
        iter.fold(Decimal::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Decimal>,
    {
        iter.copied().product()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl<'de> serde::de::Visitor<'de> for DecimalVisitor {
            type Value = Decimal;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal number string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Decimal, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DecimalVisitor)
    }
}

#[cfg(feature = "num-traits")]
#[cfg_attr(docsrs, doc(cfg(feature = "num-traits")))]
impl num_traits::Zero for Decimal {
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

#[cfg(feature = "num-traits")]
#[cfg_attr(docsrs, doc(cfg(feature = "num-traits")))]
impl num_traits::One for Decimal {
    fn one() -> Decimal {
        Decimal::ONE
    }
}
