#[cfg(test)]
mod tests {
    use crate::{Expr, Number, Settings, Simplifier};

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn test_identities_with_zero_and_one() {
        let cases = [
            (Expr::sum(x(), Expr::integer(0)), x()),
            (Expr::sum(Expr::integer(0), x()), x()),
            (Expr::minus(x(), Expr::integer(0)), x()),
            (Expr::mul(Expr::integer(1), x()), x()),
            (Expr::mul(x(), Expr::integer(0)), Expr::integer(0)),
            (Expr::div(x(), Expr::integer(1)), x()),
            (Expr::div(Expr::integer(0), x()), Expr::integer(0)),
            (Expr::pow(x(), Expr::integer(1)), x()),
            (Expr::pow(x(), Expr::integer(0)), Expr::integer(1)),
            (Expr::pow(Expr::integer(1), x()), Expr::integer(1)),
            (Expr::minus(x(), x()), Expr::integer(0)),
            (Expr::div(x(), x()), Expr::integer(1)),
        ];
        for (input, expected) in cases {
            assert_eq!(input.simplify(), expected, "simplifying {}", input);
        }
    }

    #[test]
    fn test_infinite_operands_block_cancellation() {
        let e = Expr::mul(Expr::positive_infinity(), Expr::integer(0));
        assert!(e.simplify().is_nan());
        let e = Expr::minus(Expr::sin(Expr::nan()), Expr::sin(Expr::nan()));
        assert_ne!(e.simplify(), Expr::integer(0));
    }

    #[test]
    fn test_numeric_folding() {
        assert_eq!(Expr::pow(Expr::integer(2), Expr::integer(10)).eval(), Expr::integer(1024));
        assert!(Expr::div(Expr::integer(1), Expr::integer(0)).eval().is_nan());
        assert_eq!(Expr::pow(Expr::integer(4), Expr::rational(1, 2)).eval(), Expr::integer(2));
        assert_eq!(
            Expr::sum(Expr::rational(1, 2), Expr::rational(1, 3)).eval(),
            Expr::rational(5, 6)
        );
        // Not exact: kept symbolic
        let root = Expr::pow(Expr::integer(2), Expr::rational(1, 2));
        assert_eq!(root.eval(), root);
        assert_eq!(root.simplify(), root);
        assert_eq!(Expr::abs(Expr::integer(-3)).eval(), Expr::integer(3));
    }

    #[test]
    fn test_eval_with_settings() {
        let settings = Settings::default().with_downcasting(false);
        let e = Expr::sum(Expr::rational(1, 2), Expr::rational(1, 2));
        let out = e.eval_with(&settings);
        assert!(matches!(out.as_number(), Some(Number::Rational(_))));
        assert_eq!(e.eval(), Expr::integer(1));
    }

    #[test]
    fn test_like_terms() {
        // x + 3x + 2 -> 4x + 2
        let e = Expr::sum(
            Expr::sum(x(), Expr::mul(Expr::integer(3), x())),
            Expr::integer(2),
        );
        assert_eq!(e.simplify().to_string(), "4 * x + 2");

        // 2x - 2x + y -> y
        let e = Expr::sum(
            Expr::minus(Expr::mul(Expr::integer(2), x()), Expr::mul(Expr::integer(2), x())),
            Expr::var("y"),
        );
        assert_eq!(e.simplify(), Expr::var("y"));
    }

    #[test]
    fn test_like_factors() {
        assert_eq!(
            Expr::mul(x(), x()).simplify(),
            Expr::pow(x(), Expr::integer(2))
        );
        let e = Expr::mul(Expr::mul(x(), Expr::integer(3)), Expr::pow(x(), Expr::integer(2)));
        assert_eq!(
            e.simplify(),
            Expr::mul(Expr::integer(3), Expr::pow(x(), Expr::integer(3)))
        );
        // Factors inside a quotient take part
        let e = Expr::mul(x(), Expr::div(Expr::integer(1), x()));
        assert_eq!(e.simplify(), Expr::integer(1));
        let e = Expr::mul(x(), Expr::div(Expr::integer(1), x()));
        assert_eq!(Simplifier::new().with_domain_safe(true).simplify(&e), e);
    }

    #[test]
    fn test_power_of_power() {
        let e = Expr::pow(Expr::pow(x(), Expr::integer(2)), Expr::integer(3));
        assert_eq!(e.simplify(), Expr::pow(x(), Expr::integer(6)));
        let e = Expr::sqrt(Expr::pow(x(), Expr::integer(2)));
        assert_eq!(e.simplify(), Expr::abs(x()));
    }

    #[test]
    fn test_trigonometric_rules() {
        let zero = Expr::integer(0);
        assert_eq!(Expr::sin(zero.clone()).simplify(), Expr::integer(0));
        assert_eq!(Expr::cos(zero.clone()).simplify(), Expr::integer(1));
        assert_eq!(Expr::tan(zero).simplify(), Expr::integer(0));
        assert_eq!(Expr::cos(Expr::neg(x())).simplify(), Expr::cos(x()));
        assert_eq!(Expr::sin(Expr::neg(x())).simplify(), Expr::neg(Expr::sin(x())));
        let pythagorean = Expr::sum(
            Expr::pow(Expr::cos(x()), Expr::integer(2)),
            Expr::pow(Expr::sin(x()), Expr::integer(2)),
        );
        assert_eq!(pythagorean.simplify(), Expr::integer(1));
    }

    #[test]
    fn test_logarithm_rules() {
        assert_eq!(Expr::ln(Expr::e()).simplify(), Expr::integer(1));
        assert_eq!(Expr::log(Expr::integer(10), Expr::integer(1)).simplify(), Expr::integer(0));
        let e = Expr::log(Expr::integer(2), Expr::pow(Expr::integer(2), x()));
        assert_eq!(e.simplify(), x());
        let e = Expr::pow(Expr::e(), Expr::ln(x()));
        assert_eq!(e.simplify(), x());
    }

    #[test]
    fn test_domain_safe_mode() {
        let mut safe = Simplifier::new().with_domain_safe(true);
        let e = Expr::pow(x(), Expr::integer(0));
        assert_eq!(safe.simplify(&e), e);
        let e = Expr::div(Expr::integer(0), x());
        assert_eq!(safe.simplify(&e), e);
        // Rules valid everywhere still run
        let e = Expr::sum(x(), Expr::integer(0));
        assert_eq!(safe.simplify(&e), x());
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let exprs = [
            Expr::sum(Expr::mul(Expr::integer(2), x()), Expr::integer(2)),
            Expr::mul(Expr::integer(-3), Expr::mul(Expr::sin(x()), x())),
            Expr::div(Expr::sin(x()), Expr::pow(x(), Expr::integer(2))),
        ];
        for e in exprs {
            let once = e.simplify();
            assert_eq!(once.simplify(), once, "not a fixpoint: {}", e);
        }
    }

    #[test]
    fn test_simplicity_never_increases() {
        let e = Expr::sum(
            Expr::mul(Expr::integer(1), Expr::pow(x(), Expr::integer(1))),
            Expr::minus(Expr::var("y"), Expr::var("y")),
        );
        let out = e.simplify();
        assert!(out.simplicity() <= e.simplicity());
        assert_eq!(out, x());
    }
}
