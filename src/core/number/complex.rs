use super::real::Real;
use std::fmt;

/// A complex number with real components
#[derive(Clone, Debug, PartialEq, Hash)]
pub struct Complex {
    pub re: Real,
    pub im: Real,
}

impl Complex {
    pub fn new(re: Real, im: Real) -> Self {
        Self { re, im }
    }

    /// The imaginary unit
    pub fn i() -> Self {
        Self::new(Real::zero(), Real::one())
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    pub fn neg(&self) -> Self {
        Self::new(self.re.neg(), self.im.neg())
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), self.im.neg())
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.re.add(&other.re), self.im.add(&other.im))
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.re.sub(&other.re), self.im.sub(&other.im))
    }

    pub fn mul(&self, other: &Self) -> Self {
        let re = self.re.mul(&other.re).sub(&self.im.mul(&other.im));
        let im = self.re.mul(&other.im).add(&self.im.mul(&other.re));
        Self::new(re, im)
    }

    /// Complex division; dividing by zero yields NaN components
    pub fn div(&self, other: &Self, precision: u32) -> Self {
        if other.is_zero() {
            return Self::new(Real::NaN, Real::NaN);
        }
        let denom = other.re.mul(&other.re).add(&other.im.mul(&other.im));
        let numer = self.mul(&other.conjugate());
        Self::new(
            numer.re.div(&denom, precision),
            numer.im.div(&denom, precision),
        )
    }

    fn write_with(&self, f: &mut fmt::Formatter<'_>, re: &str, im: &str) -> fmt::Result {
        if self.re.is_zero() {
            return write!(f, "{}i", im);
        }
        if self.im.is_negative() {
            let magnitude = im.trim_start_matches('-');
            write!(f, "{} - {}i", re, magnitude)
        } else {
            write!(f, "{} + {}i", re, im)
        }
    }

    pub(crate) fn to_latex(&self) -> String {
        struct Latex<'a>(&'a Complex);
        impl fmt::Display for Latex<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0
                    .write_with(f, &self.0.re.to_latex(), &self.0.im.to_latex())
            }
        }
        Latex(self).to_string()
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &self.re.to_string(), &self.im.to_string())
    }
}
