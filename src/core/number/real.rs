//! Real numbers: exact decimals plus the IEEE-style special values.

use super::decimal::Decimal;
use super::rational;
use super::Number;
use crate::core::settings::Settings;
use num_bigint::BigInt;
use num_traits::One;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A real value
#[derive(Clone, Debug)]
pub enum Real {
    Finite(Decimal),
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Real::Finite(a), Real::Finite(b)) => a == b,
            (Real::PositiveInfinity, Real::PositiveInfinity) => true,
            (Real::NegativeInfinity, Real::NegativeInfinity) => true,
            // NaN is unequal to everything, itself included
            _ => false,
        }
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Real::Finite(d) = self {
            d.hash(state);
        }
    }
}

impl Real {
    pub fn zero() -> Self {
        Real::Finite(Decimal::zero())
    }

    pub fn one() -> Self {
        Real::Finite(Decimal::one())
    }

    /// Downcasting factory using the process-wide settings
    pub fn create(value: Decimal) -> Number {
        Self::create_with(value, &Settings::current())
    }

    /// Downcasting factory.
    ///
    /// A value within epsilon of an integer becomes that integer; otherwise
    /// a value within epsilon of a rational with bounded numerator and
    /// denominator becomes that rational. Everything else stays real.
    pub fn create_with(value: Decimal, settings: &Settings) -> Number {
        if !settings.downcasting() {
            return Number::Real(Real::Finite(value));
        }

        let floor = value.floor();
        let frac = value.sub(&Decimal::from_bigint(floor.clone()));
        let epsilon = settings.zero_epsilon();

        if frac < *epsilon {
            return Number::Integer(floor);
        }
        if frac > Decimal::one().sub(epsilon) {
            return Number::Integer(floor + BigInt::one());
        }
        match rational::find_rational(&value, settings) {
            Some(r) => Number::from_rational_with(r, settings),
            None => Number::Real(Real::Finite(value)),
        }
    }

    /// Parse a real literal. Accepts decimal numerals and the sentinels
    /// produced by `Display` (`NaN`, `+oo`, `-oo`).
    pub fn try_parse(text: &str) -> Option<Real> {
        match text.trim() {
            "NaN" => Some(Real::NaN),
            "+oo" | "oo" => Some(Real::PositiveInfinity),
            "-oo" => Some(Real::NegativeInfinity),
            other => Decimal::parse(other).map(Real::Finite),
        }
    }

    pub fn from_f64(value: f64) -> Real {
        if value.is_nan() {
            Real::NaN
        } else if value == f64::INFINITY {
            Real::PositiveInfinity
        } else if value == f64::NEG_INFINITY {
            Real::NegativeInfinity
        } else {
            Decimal::from_f64(value).map_or(Real::NaN, Real::Finite)
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Real::Finite(_))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Real::NaN)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Real::Finite(d) if d.is_zero())
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Real::Finite(d) => d.is_negative(),
            Real::NegativeInfinity => true,
            _ => false,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Real::Finite(d) => d.is_positive(),
            Real::PositiveInfinity => true,
            _ => false,
        }
    }

    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Real::Finite(d) => Some(d),
            _ => None,
        }
    }

    pub fn neg(&self) -> Real {
        match self {
            Real::Finite(d) => Real::Finite(d.neg()),
            Real::PositiveInfinity => Real::NegativeInfinity,
            Real::NegativeInfinity => Real::PositiveInfinity,
            Real::NaN => Real::NaN,
        }
    }

    pub fn abs(&self) -> Real {
        match self {
            Real::Finite(d) => Real::Finite(d.abs()),
            Real::PositiveInfinity | Real::NegativeInfinity => Real::PositiveInfinity,
            Real::NaN => Real::NaN,
        }
    }

    pub fn add(&self, other: &Real) -> Real {
        use Real::*;
        match (self, other) {
            (NaN, _) | (_, NaN) => NaN,
            (Finite(a), Finite(b)) => Finite(a.add(b)),
            (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => NaN,
            (PositiveInfinity, _) | (_, PositiveInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, NegativeInfinity) => NegativeInfinity,
        }
    }

    pub fn sub(&self, other: &Real) -> Real {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Real) -> Real {
        use Real::*;
        match (self, other) {
            (NaN, _) | (_, NaN) => NaN,
            (Finite(a), Finite(b)) => Finite(a.mul(b)),
            // 0 * oo
            (a, b) if a.is_zero() || b.is_zero() => NaN,
            (a, b) => {
                if a.is_negative() == b.is_negative() {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
        }
    }

    /// Real division; any division by zero yields NaN
    pub fn div(&self, other: &Real, precision: u32) -> Real {
        use Real::*;
        match (self, other) {
            (NaN, _) | (_, NaN) => NaN,
            (_, b) if b.is_zero() => NaN,
            (Finite(a), Finite(b)) => a.div(b, precision).map_or(NaN, Finite),
            (Finite(_), _) => Real::zero(),
            (_, Finite(b)) => {
                if self.is_negative() == b.is_negative() {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
            // oo / oo
            _ => NaN,
        }
    }

    /// Total order on non-NaN values, `None` when either side is NaN
    pub fn compare(&self, other: &Real) -> Option<Ordering> {
        use Real::*;
        match (self, other) {
            (NaN, _) | (_, NaN) => None,
            (Finite(a), Finite(b)) => Some(a.cmp(b)),
            (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => {
                Some(Ordering::Equal)
            }
            (PositiveInfinity, _) | (_, NegativeInfinity) => Some(Ordering::Greater),
            (NegativeInfinity, _) | (_, PositiveInfinity) => Some(Ordering::Less),
        }
    }

    pub(crate) fn to_latex(&self) -> String {
        match self {
            Real::Finite(d) => d.to_string(),
            Real::PositiveInfinity => r"\infty".to_string(),
            Real::NegativeInfinity => r"-\infty".to_string(),
            Real::NaN => r"\mathrm{undefined}".to_string(),
        }
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Real::Finite(d) => write!(f, "{}", d),
            Real::PositiveInfinity => write!(f, "+oo"),
            Real::NegativeInfinity => write!(f, "-oo"),
            Real::NaN => write!(f, "NaN"),
        }
    }
}
