#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Standard test relaxations")]
mod tests {
    use crate::{Complex, Decimal, Expr, Number, Real, Settings, SymbError};
    use num_bigint::BigInt;
    use std::cmp::Ordering;

    fn create(text: &str) -> Number {
        Real::create_with(Decimal::parse(text).unwrap(), &Settings::default())
    }

    #[test]
    fn test_downcast_to_integer() {
        assert_eq!(create("10.0"), Number::integer(10));
        assert_eq!(create("-3"), Number::integer(-3));
    }

    #[test]
    fn test_downcast_to_rational() {
        assert_eq!(create("0.5"), Number::rational(1, 2));
        assert_eq!(create("0.3333333333333333"), Number::rational(1, 3));
        assert_eq!(create("-2.25"), Number::rational(-9, 4));
    }

    #[test]
    fn test_large_denominator_stays_real() {
        // 2^-30: the only exact rational has a denominator above the maximum
        let n = create("0.000000000931322574615478515625");
        assert!(matches!(n, Number::Real(_)));
    }

    #[test]
    fn test_downcasting_disabled_keeps_variant() {
        let settings = Settings::default().with_downcasting(false);
        let n = Real::create_with(Decimal::parse("10").unwrap(), &settings);
        assert!(matches!(n, Number::Real(_)));

        let r = Number::rational_with(4, 2, &settings);
        assert!(matches!(r, Number::Rational(_)));

        let c = Number::complex_with(Real::one(), Real::zero(), &settings);
        assert!(matches!(c, Number::Complex(_)));
    }

    #[test]
    fn test_factories_narrow() {
        assert_eq!(Number::rational(6, 3), Number::integer(2));
        assert_eq!(Number::complex(Real::one(), Real::zero()), Number::integer(1));
        assert!(matches!(
            Number::complex(Real::zero(), Real::one()),
            Number::Complex(_)
        ));
        assert_eq!(Number::from_f64(0.25), Number::rational(1, 4));
    }

    #[test]
    fn test_tighter_epsilon_keeps_approximation_real() {
        let settings = Settings::default()
            .with_zero_epsilon(Decimal::new(BigInt::from(1), -30));
        let n = Real::create_with(Decimal::parse("0.3333333333333333").unwrap(), &settings);
        assert!(matches!(n, Number::Real(_)));
    }

    #[test]
    fn test_nan_semantics() {
        let nan = Number::nan();
        assert_ne!(nan, Number::nan());
        assert!(!nan.is_finite());
        assert!(nan.compare(&Number::integer(1)).is_none());
        assert_ne!(Expr::nan(), Expr::nan());
    }

    #[test]
    fn test_division_by_zero_is_nan() {
        let zero = Number::integer(0);
        assert!(Number::integer(1).div(&zero).is_nan());
        assert!(Number::rational(1, 2).div(&zero).is_nan());
        assert!(Number::from_f64(1.5).div(&zero).is_nan());
        assert!(Number::complex(Real::one(), Real::one()).div(&zero).is_nan());
        assert!(Number::rational(1, 0).is_nan());
    }

    #[test]
    fn test_infinite_arithmetic() {
        let inf = Number::positive_infinity();
        let neg_inf = Number::negative_infinity();
        assert!(inf.add(&neg_inf).is_nan());
        assert!(inf.mul(&Number::integer(0)).is_nan());
        assert_eq!(inf.add(&Number::integer(5)), Number::positive_infinity());
    }

    #[test]
    fn test_mixed_level_arithmetic() {
        let half = Number::rational(1, 2);
        assert_eq!(half.add(&half), Number::integer(1));
        assert_eq!(Number::integer(3).div(&Number::integer(6)), half);
        assert_eq!(Number::from_f64(0.5).add(&half), Number::integer(1));
        let i = Number::Complex(Complex::i());
        assert_eq!(i.mul(&i), Number::integer(-1));
    }

    #[test]
    fn test_exact_powers() {
        let two = Number::integer(2);
        assert_eq!(two.checked_pow(&Number::integer(10)), Some(Number::integer(1024)));
        assert_eq!(
            two.checked_pow(&Number::integer(-2)),
            Some(Number::rational(1, 4))
        );
        assert_eq!(
            Number::integer(4).checked_pow(&Number::rational(1, 2)),
            Some(Number::integer(2))
        );
        assert_eq!(
            Number::integer(8).checked_pow(&Number::rational(2, 3)),
            Some(Number::integer(4))
        );
        assert_eq!(two.checked_pow(&Number::rational(1, 2)), None);
        assert_eq!(
            Number::rational(2, 3).checked_pow(&Number::integer(2)),
            Some(Number::rational(4, 9))
        );
    }

    #[test]
    fn test_abs_and_signum() {
        assert_eq!(Number::integer(-7).abs(), Some(Number::integer(7)));
        // |3 + 4i| = 5
        let c = Number::complex(
            Real::Finite(Decimal::from_bigint(BigInt::from(3))),
            Real::Finite(Decimal::from_bigint(BigInt::from(4))),
        );
        assert_eq!(c.abs(), Some(Number::integer(5)));
        assert_eq!(Number::rational(-1, 2).signum(), Some(Number::integer(-1)));
        assert_eq!(Number::nan().signum(), None);
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            Number::rational(1, 3).compare(&Number::from_f64(0.25)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::negative_infinity().compare(&Number::integer(-1000)),
            Some(Ordering::Less)
        );
        let c = Number::complex(Real::one(), Real::one());
        assert!(c.compare(&Number::integer(1)).is_none());
        assert!(matches!(
            c.try_compare(&Number::integer(1)),
            Err(SymbError::DomainMismatch(_))
        ));
        assert_eq!(
            Number::integer(2).try_compare(&Number::integer(3)).unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Number::try_parse("123456789012345678901234567890").map(|n| n.is_integer()), Some(true));
        assert_eq!(Number::try_parse("0.75"), Some(Number::rational(3, 4)));
        assert_eq!(Number::try_parse("2.0"), Some(Number::integer(2)));
        assert!(Number::try_parse("1.2.3").is_none());
        assert!(Number::try_parse("abc").is_none());
        assert!(matches!(
            Number::parse("x1"),
            Err(SymbError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_oversize_exponents() {
        // 2^32 + 1: narrowing the exponent would yield 10
        assert_eq!(Number::try_parse("1e4294967297"), None);
        assert_eq!(Number::try_parse("1e999999999"), None);
        assert!(matches!(
            Number::parse("2.5e-999999"),
            Err(SymbError::InvalidNumber { .. })
        ));
        let big = Number::try_parse("1e40").unwrap();
        assert!(big.is_integer());
        assert_eq!(big.to_string(), format!("1{}", "0".repeat(40)));
    }

    #[test]
    fn test_number_leaf_rendering() {
        assert_eq!(Expr::rational(-1, 2).to_string(), "-1/2");
        assert_eq!(Expr::from_f64(1.5).to_string(), "3/2");
        let c = Expr::number(Number::complex(Real::one(), Real::one().neg()));
        assert_eq!(c.to_string(), "1 - 1i");
        // A complex leaf with a real part groups like a sum
        assert_eq!(Expr::mul(Expr::var("x"), c).to_string(), "x * (1 - 1i)");
    }
}
