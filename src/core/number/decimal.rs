//! Arbitrary-precision decimal: `mantissa × 10^exponent`.
//!
//! Values are kept normalized (no trailing zeros in the mantissa, zero has
//! exponent 0), so derived structural equality coincides with value equality.

use num_bigint::{BigInt, Sign};
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Exponents beyond this magnitude are printed in scientific notation
const PLAIN_NOTATION_LIMIT: i64 = 30;

/// Largest exponent magnitude accepted by [`Decimal::parse`].
/// Aligning or downcasting a decimal materializes `10^exponent`.
pub const MAX_PARSED_EXPONENT: i64 = 100_000;

/// An exact decimal number
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: BigInt,
    exponent: i64,
}

pub(crate) fn pow10(n: u64) -> BigInt {
    Pow::pow(BigInt::from(10u8), n)
}

fn digit_count(n: &BigInt) -> i64 {
    if n.is_zero() {
        1
    } else {
        n.magnitude().to_str_radix(10).len() as i64
    }
}

impl Decimal {
    /// Build `mantissa × 10^exponent`
    pub fn new(mantissa: BigInt, exponent: i64) -> Self {
        Self { mantissa, exponent }.normalized()
    }

    /// The decimal zero
    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    /// The decimal one
    pub fn one() -> Self {
        Self {
            mantissa: BigInt::one(),
            exponent: 0,
        }
    }

    pub fn from_bigint(n: BigInt) -> Self {
        Self::new(n, 0)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    fn normalized(mut self) -> Self {
        if self.mantissa.is_zero() {
            self.exponent = 0;
            return self;
        }
        let ten = BigInt::from(10u8);
        loop {
            let (q, r) = self.mantissa.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            self.mantissa = q;
            self.exponent += 1;
        }
        self
    }

    /// Parse a decimal literal: optional sign, digits with an optional
    /// fractional part, optional `e`/`E` exponent. Returns `None` on any
    /// malformed input and when the normalized exponent exceeds
    /// [`MAX_PARSED_EXPONENT`] in magnitude.
    pub fn parse(text: &str) -> Option<Self> {
        let s = text.trim();
        let (negative, body) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (number_part, exp_part) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };

        let (int_digits, frac_digits) = match number_part.split_once('.') {
            Some((i, f)) => (i, f),
            None => (number_part, ""),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }
        if !int_digits.bytes().all(|b| b.is_ascii_digit())
            || !frac_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let mut exponent: i64 = match exp_part {
            Some(e) => {
                let digits = e.strip_prefix('+').unwrap_or(e);
                if digits.is_empty() || digits.starts_with('+') {
                    return None;
                }
                digits.parse().ok()?
            }
            None => 0,
        };

        let all_digits = format!("{}{}", int_digits, frac_digits);
        let mut mantissa = BigInt::parse_bytes(all_digits.as_bytes(), 10)?;
        exponent = exponent.checked_sub(i64::try_from(frac_digits.len()).ok()?)?;
        if negative {
            mantissa = -mantissa;
        }
        let value = Self::new(mantissa, exponent);
        (value.exponent.abs() <= MAX_PARSED_EXPONENT).then_some(value)
    }

    /// Exact decimal for the shortest representation that round-trips `value`
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Self::parse(&format!("{:e}", value))
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa.sign() == Sign::Plus
    }

    /// True when the value has no fractional part
    pub fn is_integer(&self) -> bool {
        self.exponent >= 0
    }

    /// Exact integer value, when there is no fractional part
    pub fn to_bigint(&self) -> Option<BigInt> {
        if self.exponent >= 0 {
            Some(&self.mantissa * pow10(self.exponent.unsigned_abs()))
        } else {
            None
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            mantissa: -&self.mantissa,
            exponent: self.exponent,
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            exponent: self.exponent,
        }
    }

    /// Both mantissas rescaled to the smaller of the two exponents
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, i64) {
        let exponent = self.exponent.min(other.exponent);
        let a = &self.mantissa * pow10((self.exponent - exponent).unsigned_abs());
        let b = &other.mantissa * pow10((other.exponent - exponent).unsigned_abs());
        (a, b, exponent)
    }

    pub fn add(&self, other: &Self) -> Self {
        let (a, b, exponent) = self.aligned(other);
        Self::new(a + b, exponent)
    }

    pub fn sub(&self, other: &Self) -> Self {
        let (a, b, exponent) = self.aligned(other);
        Self::new(a - b, exponent)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            &self.mantissa * &other.mantissa,
            self.exponent + other.exponent,
        )
    }

    /// Quotient truncated to `precision` significant digits.
    /// Exact quotients with fewer digits come out exact.
    /// Returns `None` when dividing by zero.
    pub fn div(&self, other: &Self, precision: u32) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(Self::zero());
        }
        let shift = (i64::from(precision) + digit_count(&other.mantissa)
            - digit_count(&self.mantissa)
            + 1)
        .max(0);
        let scaled = &self.mantissa * pow10(shift.unsigned_abs());
        let quotient = scaled / &other.mantissa;
        Some(Self::new(quotient, self.exponent - other.exponent - shift))
    }

    /// Largest integer not greater than the value
    pub fn floor(&self) -> BigInt {
        if self.exponent >= 0 {
            &self.mantissa * pow10(self.exponent.unsigned_abs())
        } else {
            self.mantissa
                .div_floor(&pow10(self.exponent.unsigned_abs()))
        }
    }

    /// The value as an exact rational
    pub fn to_rational(&self) -> BigRational {
        if self.exponent >= 0 {
            BigRational::from_integer(&self.mantissa * pow10(self.exponent.unsigned_abs()))
        } else {
            BigRational::new(
                self.mantissa.clone(),
                pow10(self.exponent.unsigned_abs()),
            )
        }
    }

    /// Decimal expansion of a rational, truncated to `precision` digits
    pub fn from_rational(value: &BigRational, precision: u32) -> Self {
        let numer = Self::from_bigint(value.numer().clone());
        let denom = Self::from_bigint(value.denom().clone());
        // Denominators of a BigRational are never zero.
        numer.div(&denom, precision).unwrap_or_else(Self::zero)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.mantissa.sign(), other.mantissa.sign()) {
            (a, b) if a != b => return a.cmp(&b),
            _ => {}
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.mantissa.magnitude().to_str_radix(10);
        let len = digits.len() as i64;

        // Exponent of the leading digit in scientific notation
        let adjusted = self.exponent + len - 1;
        if adjusted > PLAIN_NOTATION_LIMIT || adjusted < -PLAIN_NOTATION_LIMIT {
            let (head, tail) = digits.split_at(1);
            let exp_sign = if adjusted >= 0 { "+" } else { "-" };
            return if tail.is_empty() {
                write!(f, "{}{}E{}{}", sign, head, exp_sign, adjusted.abs())
            } else {
                write!(f, "{}{}.{}E{}{}", sign, head, tail, exp_sign, adjusted.abs())
            };
        }

        if self.exponent >= 0 {
            let zeros = "0".repeat(self.exponent.unsigned_abs() as usize);
            write!(f, "{}{}{}", sign, digits, zeros)
        } else {
            let frac_len = self.exponent.unsigned_abs() as usize;
            if digits.len() > frac_len {
                let (int_part, frac_part) = digits.split_at(digits.len() - frac_len);
                write!(f, "{}{}.{}", sign, int_part, frac_part)
            } else {
                let pad = "0".repeat(frac_len - digits.len());
                write!(f, "{}0.{}{}", sign, pad, digits)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Standard test relaxations")]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_normalize() {
        assert_eq!(d("1.50"), d("1.5"));
        assert_eq!(d("100"), Decimal::new(BigInt::from(1), 2));
        assert_eq!(d("-0.25").to_string(), "-0.25");
        assert_eq!(d("1e3"), d("1000"));
        assert_eq!(d(".5"), d("0.5"));
        assert_eq!(d("0.000"), Decimal::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "-", ".", "1.2.3", "abc", "1e", "1e+", "--1", "1 2", "0x10"] {
            assert!(Decimal::parse(bad).is_none(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_parse_rejects_oversize_exponents() {
        // Would wrap to 1e1 if the exponent were narrowed to 32 bits
        assert!(Decimal::parse("1e4294967297").is_none());
        assert!(Decimal::parse("1e999999999").is_none());
        assert!(Decimal::parse("-5e-100001").is_none());
        assert!(Decimal::parse("1e99999999999999999999").is_none());

        let edge = d("1e100000");
        assert_eq!(edge.exponent(), MAX_PARSED_EXPONENT);
        // Trailing zeros count towards the exponent
        assert!(Decimal::parse("10e99999").is_some());
        assert!(Decimal::parse("100e99999").is_none());
    }

    #[test]
    fn test_pow10_keeps_wide_exponents() {
        let big = pow10(40);
        assert_eq!(big.to_string().len(), 41);
        assert_eq!(d("1e40").to_bigint(), Some(big));
    }

    #[test]
    fn test_from_f64_is_shortest_repr() {
        assert_eq!(Decimal::from_f64(0.1).unwrap(), d("0.1"));
        assert_eq!(Decimal::from_f64(10.0).unwrap(), d("10"));
        assert_eq!(Decimal::from_f64(-2.5e-3).unwrap(), d("-0.0025"));
        assert!(Decimal::from_f64(f64::NAN).is_none());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(d("0.1").add(&d("0.2")), d("0.3"));
        assert_eq!(d("1").sub(&d("0.75")), d("0.25"));
        assert_eq!(d("1.5").mul(&d("-4")), d("-6"));
        assert_eq!(d("1").div(&d("8"), 50).unwrap(), d("0.125"));
        assert!(d("1").div(&Decimal::zero(), 50).is_none());

        let third = d("1").div(&d("3"), 10).unwrap();
        assert!(third.to_string().starts_with("0.3333333333"));
    }

    #[test]
    fn test_floor_and_ordering() {
        assert_eq!(d("2.7").floor(), BigInt::from(2));
        assert_eq!(d("-2.1").floor(), BigInt::from(-3));
        assert!(d("-1") < d("0.5"));
        assert!(d("0.25") < d("0.3"));
        assert_eq!(d("12.5").to_rational(), BigRational::new(25.into(), 2.into()));
    }

    #[test]
    fn test_display_notation() {
        assert_eq!(d("0.0005").to_string(), "0.0005");
        assert_eq!(d("1200").to_string(), "1200");
        assert_eq!(d("1e40").to_string(), "1E+40");
        assert_eq!(d("-1.5e-40").to_string(), "-1.5E-40");
    }
}
