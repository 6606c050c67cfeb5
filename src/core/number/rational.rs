//! Rational helpers: continued-fraction approximation and exact roots.

use super::decimal::Decimal;
use crate::core::settings::Settings;
use num_bigint::{BigInt, Sign};
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Convergents examined before giving up
const MAX_CONVERGENTS: usize = 128;

/// Find the first continued-fraction convergent of `value` that lies within
/// the configured epsilon, as long as its numerator and denominator stay
/// within the configured magnitude.
pub(crate) fn find_rational(value: &Decimal, settings: &Settings) -> Option<BigRational> {
    let target = value.to_rational();
    let epsilon = settings.zero_epsilon().to_rational();
    let max = settings.max_numerator_denominator();

    let (mut h_prev, mut h) = (BigInt::zero(), BigInt::one());
    let (mut k_prev, mut k) = (BigInt::one(), BigInt::zero());
    let mut rest = target.clone();

    for _ in 0..MAX_CONVERGENTS {
        let a = rest.floor().to_integer();
        let h_next = &a * &h + &h_prev;
        let k_next = &a * &k + &k_prev;
        if h_next.abs() > *max || k_next > *max {
            return None;
        }

        let candidate = BigRational::new(h_next.clone(), k_next.clone());
        let frac = &rest - BigRational::from_integer(a);
        if (&candidate - &target).abs() < epsilon || frac.is_zero() {
            return Some(candidate);
        }

        rest = frac.recip();
        h_prev = std::mem::replace(&mut h, h_next);
        k_prev = std::mem::replace(&mut k, k_next);
    }
    None
}

/// Exact `q`-th root of an integer, if there is one
pub(crate) fn exact_root(value: &BigInt, q: u32) -> Option<BigInt> {
    if q == 0 {
        return None;
    }
    if value.sign() == Sign::Minus {
        // Odd roots of negatives are real; even ones are not
        if q % 2 == 0 {
            return None;
        }
        return exact_root(&-value, q).map(|r| -r);
    }
    let root = value.nth_root(q);
    if root.pow(q) == *value {
        Some(root)
    } else {
        None
    }
}

/// Exact `q`-th root of a rational, if both parts have one
pub(crate) fn exact_rational_root(value: &BigRational, q: u32) -> Option<BigRational> {
    let numer = exact_root(value.numer(), q)?;
    let denom = exact_root(value.denom(), q)?;
    Some(BigRational::new(numer, denom))
}
