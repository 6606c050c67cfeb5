//! Numeric tower: Integer ⊆ Rational ⊆ Real ⊆ Complex.
//!
//! Every arithmetic result goes back through the downcasting factories, so a
//! value is always stored at the narrowest level that represents it (unless
//! downcasting is disabled in the active [`Settings`]).

mod complex;
mod decimal;
pub(crate) mod rational;
mod real;

pub use complex::Complex;
pub use decimal::{Decimal, MAX_PARSED_EXPONENT};
pub use real::Real;

use crate::core::error::SymbError;
use crate::core::settings::Settings;
use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Integer exponents above this are left symbolic instead of expanded
const MAX_EXACT_EXPONENT: u32 = 4096;

/// A number at some level of the tower
#[derive(Clone, Debug)]
pub enum Number {
    Integer(BigInt),
    Rational(BigRational),
    Real(Real),
    Complex(Complex),
}

impl PartialEq for Number {
    /// Structural: same level and same value. NaN is never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Rational(a), Number::Rational(b)) => a == b,
            (Number::Real(a), Number::Real(b)) => a == b,
            (Number::Complex(a), Number::Complex(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Number::Integer(n) => n.hash(state),
            Number::Rational(r) => r.hash(state),
            Number::Real(r) => r.hash(state),
            Number::Complex(c) => c.hash(state),
        }
    }
}

impl Number {
    pub fn integer(value: impl Into<BigInt>) -> Number {
        Number::Integer(value.into())
    }

    /// `numer / denom` through the downcasting factory; zero denominator gives NaN
    pub fn rational(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Number {
        Self::rational_with(numer, denom, &Settings::current())
    }

    pub fn rational_with(
        numer: impl Into<BigInt>,
        denom: impl Into<BigInt>,
        settings: &Settings,
    ) -> Number {
        let denom = denom.into();
        if denom.is_zero() {
            return Number::nan();
        }
        Self::from_rational_with(BigRational::new(numer.into(), denom), settings)
    }

    pub fn real(value: Real) -> Number {
        Self::from_real_with(value, &Settings::current())
    }

    pub fn complex(re: Real, im: Real) -> Number {
        Self::from_complex_with(Complex::new(re, im), &Settings::current())
    }

    pub fn complex_with(re: Real, im: Real, settings: &Settings) -> Number {
        Self::from_complex_with(Complex::new(re, im), settings)
    }

    pub fn from_f64(value: f64) -> Number {
        Self::from_f64_with(value, &Settings::current())
    }

    pub fn from_f64_with(value: f64, settings: &Settings) -> Number {
        Self::from_real_with(Real::from_f64(value), settings)
    }

    pub fn nan() -> Number {
        Number::Real(Real::NaN)
    }

    pub fn positive_infinity() -> Number {
        Number::Real(Real::PositiveInfinity)
    }

    pub fn negative_infinity() -> Number {
        Number::Real(Real::NegativeInfinity)
    }

    /// Rational factory: whole rationals become integers
    pub fn from_rational_with(value: BigRational, settings: &Settings) -> Number {
        if settings.downcasting() && value.is_integer() {
            Number::Integer(value.to_integer())
        } else {
            Number::Rational(value)
        }
    }

    /// Real factory: finite reals go through [`Real::create_with`]
    pub fn from_real_with(value: Real, settings: &Settings) -> Number {
        match value {
            Real::Finite(d) => Real::create_with(d, settings),
            special => Number::Real(special),
        }
    }

    /// Complex factory: a zero imaginary part collapses to a real
    pub fn from_complex_with(value: Complex, settings: &Settings) -> Number {
        if settings.downcasting() && value.im.is_zero() {
            Self::from_real_with(value.re, settings)
        } else {
            Number::Complex(value)
        }
    }

    /// Parse an integer or decimal literal.
    /// Integers parse exactly; decimals go through the downcasting factory.
    pub fn try_parse(text: &str) -> Option<Number> {
        Self::try_parse_with(text, &Settings::current())
    }

    pub fn try_parse_with(text: &str, settings: &Settings) -> Option<Number> {
        let trimmed = text.trim();
        if let Ok(n) = trimmed.parse::<BigInt>() {
            return Some(Number::Integer(n));
        }
        Real::try_parse(trimmed).map(|r| Self::from_real_with(r, settings))
    }

    /// Like [`Number::try_parse`], but reports the rejected text
    pub fn parse(text: &str) -> Result<Number, SymbError> {
        Self::try_parse(text).ok_or_else(|| SymbError::invalid_number(text))
    }

    fn level(&self) -> u8 {
        match self {
            Number::Integer(_) => 0,
            Number::Rational(_) => 1,
            Number::Real(_) => 2,
            Number::Complex(_) => 3,
        }
    }

    fn to_rational(&self) -> Option<BigRational> {
        match self {
            Number::Integer(n) => Some(BigRational::from_integer(n.clone())),
            Number::Rational(r) => Some(r.clone()),
            _ => None,
        }
    }

    fn to_real(&self, precision: u32) -> Option<Real> {
        match self {
            Number::Integer(n) => Some(Real::Finite(Decimal::from_bigint(n.clone()))),
            Number::Rational(r) => Some(Real::Finite(Decimal::from_rational(r, precision))),
            Number::Real(r) => Some(r.clone()),
            Number::Complex(_) => None,
        }
    }

    fn to_complex(&self, precision: u32) -> Complex {
        match self {
            Number::Complex(c) => c.clone(),
            other => Complex::new(other.to_real(precision).unwrap_or(Real::NaN), Real::zero()),
        }
    }

    /// Exact rational view of integers, rationals and finite reals
    fn to_exact(&self) -> Option<BigRational> {
        match self {
            Number::Real(Real::Finite(d)) => Some(d.to_rational()),
            other => other.to_rational(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => n.is_zero(),
            Number::Rational(r) => r.is_zero(),
            Number::Real(r) => r.is_zero(),
            Number::Complex(c) => c.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Number::Integer(n) => n.is_one(),
            Number::Rational(r) => r.is_one(),
            Number::Real(Real::Finite(d)) => *d == Decimal::one(),
            _ => false,
        }
    }

    /// Strictly below zero (complex numbers are never negative)
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(n) => n.sign() == Sign::Minus,
            Number::Rational(r) => r.is_negative(),
            Number::Real(r) => r.is_negative(),
            Number::Complex(_) => false,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Number::Integer(_) | Number::Rational(_) => true,
            Number::Real(r) => r.is_finite(),
            Number::Complex(c) => c.is_finite(),
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Number::Real(r) => r.is_nan(),
            Number::Complex(c) => c.is_nan(),
            _ => false,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Number::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Small integers as `i64`
    pub fn to_i64(&self) -> Option<i64> {
        self.as_integer().and_then(ToPrimitive::to_i64)
    }

    pub fn neg(&self) -> Number {
        match self {
            Number::Integer(n) => Number::Integer(-n),
            Number::Rational(r) => Number::Rational(-r),
            Number::Real(r) => Number::Real(r.neg()),
            Number::Complex(c) => Number::Complex(c.neg()),
        }
    }

    pub fn abs(&self) -> Option<Number> {
        self.abs_with(&Settings::current())
    }

    /// Absolute value. The modulus of a complex number is only produced
    /// when it is exact.
    pub fn abs_with(&self, settings: &Settings) -> Option<Number> {
        match self {
            Number::Integer(n) => Some(Number::Integer(n.abs())),
            Number::Rational(r) => Some(Number::Rational(r.abs())),
            Number::Real(r) => Some(Number::Real(r.abs())),
            Number::Complex(c) => {
                let squared = Self::from_complex_with(c.mul(&c.conjugate()), settings);
                let half = Number::rational_with(1, 2, settings);
                squared.checked_pow_with(&half, settings)
            }
        }
    }

    /// Sign of a real number as -1, 0 or 1; `None` for NaN and complex values
    pub fn signum(&self) -> Option<Number> {
        if self.is_nan() || matches!(self, Number::Complex(_)) {
            return None;
        }
        let sign = if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        };
        Some(Number::integer(sign))
    }

    pub fn add(&self, other: &Number) -> Number {
        self.add_with(other, &Settings::current())
    }

    pub fn sub(&self, other: &Number) -> Number {
        self.sub_with(other, &Settings::current())
    }

    pub fn mul(&self, other: &Number) -> Number {
        self.mul_with(other, &Settings::current())
    }

    pub fn div(&self, other: &Number) -> Number {
        self.div_with(other, &Settings::current())
    }

    pub fn add_with(&self, other: &Number, settings: &Settings) -> Number {
        let precision = settings.decimal_precision();
        match self.level().max(other.level()) {
            0 => match (self, other) {
                (Number::Integer(a), Number::Integer(b)) => Number::Integer(a + b),
                _ => Number::nan(),
            },
            1 => match (self.to_rational(), other.to_rational()) {
                (Some(a), Some(b)) => Self::from_rational_with(a + b, settings),
                _ => Number::nan(),
            },
            2 => match (self.to_real(precision), other.to_real(precision)) {
                (Some(a), Some(b)) => Self::from_real_with(a.add(&b), settings),
                _ => Number::nan(),
            },
            _ => Self::from_complex_with(
                self.to_complex(precision).add(&other.to_complex(precision)),
                settings,
            ),
        }
    }

    pub fn sub_with(&self, other: &Number, settings: &Settings) -> Number {
        self.add_with(&other.neg(), settings)
    }

    pub fn mul_with(&self, other: &Number, settings: &Settings) -> Number {
        let precision = settings.decimal_precision();
        match self.level().max(other.level()) {
            0 => match (self, other) {
                (Number::Integer(a), Number::Integer(b)) => Number::Integer(a * b),
                _ => Number::nan(),
            },
            1 => match (self.to_rational(), other.to_rational()) {
                (Some(a), Some(b)) => Self::from_rational_with(a * b, settings),
                _ => Number::nan(),
            },
            2 => match (self.to_real(precision), other.to_real(precision)) {
                (Some(a), Some(b)) => Self::from_real_with(a.mul(&b), settings),
                _ => Number::nan(),
            },
            _ => Self::from_complex_with(
                self.to_complex(precision).mul(&other.to_complex(precision)),
                settings,
            ),
        }
    }

    /// Division; any division by zero yields NaN
    pub fn div_with(&self, other: &Number, settings: &Settings) -> Number {
        if other.is_zero() {
            return Number::nan();
        }
        let precision = settings.decimal_precision();
        match self.level().max(other.level()) {
            0 | 1 => match (self.to_rational(), other.to_rational()) {
                (Some(a), Some(b)) => Self::from_rational_with(a / b, settings),
                _ => Number::nan(),
            },
            2 => match (self.to_real(precision), other.to_real(precision)) {
                (Some(a), Some(b)) => Self::from_real_with(a.div(&b, precision), settings),
                _ => Number::nan(),
            },
            _ => Self::from_complex_with(
                self.to_complex(precision)
                    .div(&other.to_complex(precision), precision),
                settings,
            ),
        }
    }

    pub fn checked_pow(&self, exponent: &Number) -> Option<Number> {
        self.checked_pow_with(exponent, &Settings::current())
    }

    /// Exact power, or `None` when the result would not be exact.
    ///
    /// Handles integer exponents on integers, rationals and finite reals, and
    /// rational exponents whose root is exact (`8^(1/3) = 2`).
    pub fn checked_pow_with(&self, exponent: &Number, settings: &Settings) -> Option<Number> {
        if !self.is_finite() || !exponent.is_finite() {
            return None;
        }
        if exponent.is_zero() {
            return Some(Number::integer(1));
        }
        if exponent.is_one() {
            return Some(self.clone());
        }
        if self.is_one() {
            return Some(Number::integer(1));
        }

        match exponent {
            Number::Integer(e) => {
                let magnitude = e.magnitude().to_u32().filter(|m| *m <= MAX_EXACT_EXPONENT)?;
                let base = self.to_exact_base()?;
                let raised = match base {
                    ExactBase::Rational(r) => {
                        Self::from_rational_with(pow_ratio(&r, magnitude), settings)
                    }
                    ExactBase::Real(d) => Self::from_real_with(
                        Real::Finite(pow_decimal(&d, magnitude)),
                        settings,
                    ),
                };
                if e.sign() == Sign::Minus {
                    Some(Number::integer(1).div_with(&raised, settings))
                } else {
                    Some(raised)
                }
            }
            Number::Rational(e) => {
                let base = self.to_rational()?;
                let q = e.denom().to_u32()?;
                let root = rational::exact_rational_root(&base, q)?;
                let root = Self::from_rational_with(root, settings);
                root.checked_pow_with(&Number::Integer(e.numer().clone()), settings)
            }
            _ => None,
        }
    }

    fn to_exact_base(&self) -> Option<ExactBase> {
        match self {
            Number::Integer(_) | Number::Rational(_) => self.to_rational().map(ExactBase::Rational),
            Number::Real(Real::Finite(d)) => Some(ExactBase::Real(d.clone())),
            _ => None,
        }
    }

    /// Ordering of two real-valued numbers.
    /// `None` for NaN or for complex values with a non-zero imaginary part.
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        let a = self.real_view()?;
        let b = other.real_view()?;
        if let (Some(x), Some(y)) = (a.to_exact(), b.to_exact()) {
            return Some(x.cmp(&y));
        }
        let precision = Settings::current().decimal_precision();
        a.to_real(precision)?.compare(&b.to_real(precision)?)
    }

    /// Like [`Number::compare`], but reports why the comparison is impossible
    pub fn try_compare(&self, other: &Number) -> Result<Ordering, SymbError> {
        if self.real_view().is_none() || other.real_view().is_none() {
            return Err(SymbError::domain(format!(
                "cannot order complex values {} and {}",
                self, other
            )));
        }
        self.compare(other).ok_or_else(|| {
            SymbError::domain(format!("cannot order {} and {} (NaN)", self, other))
        })
    }

    fn real_view(&self) -> Option<Number> {
        match self {
            Number::Complex(c) if c.im.is_zero() => Some(Number::Real(c.re.clone())),
            Number::Complex(_) => None,
            other => Some(other.clone()),
        }
    }

    pub(crate) fn to_latex(&self) -> String {
        match self {
            Number::Integer(n) => n.to_string(),
            Number::Rational(r) => {
                let sign = if r.is_negative() { "-" } else { "" };
                format!(r"{}\frac{{{}}}{{{}}}", sign, r.numer().abs(), r.denom())
            }
            Number::Real(r) => r.to_latex(),
            Number::Complex(c) => c.to_latex(),
        }
    }
}

enum ExactBase {
    Rational(BigRational),
    Real(Decimal),
}

fn pow_ratio(base: &BigRational, exponent: u32) -> BigRational {
    BigRational::new(base.numer().pow(exponent), base.denom().pow(exponent))
}

fn pow_decimal(base: &Decimal, exponent: u32) -> Decimal {
    Decimal::new(
        base.mantissa().pow(exponent),
        base.exponent() * i64::from(exponent),
    )
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Number::Real(r) => write!(f, "{}", r),
            Number::Complex(c) => write!(f, "{}", c),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Integer(value)
    }
}
