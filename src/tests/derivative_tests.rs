#[cfg(test)]
mod tests {
    use crate::{Expr, ExprKind};

    fn x() -> Expr {
        Expr::var("x")
    }

    fn d(e: &Expr) -> Expr {
        e.differentiate(&x()).simplify()
    }

    /// Fold `e` with `x` replaced by a literal
    fn at(e: &Expr, value: Expr) -> Expr {
        e.substitute(&x(), &value).eval()
    }

    fn two_x() -> Expr {
        Expr::mul(Expr::integer(2), x())
    }

    #[test]
    fn test_polynomial() {
        // x^2 + 2x + 1 -> 2x + 2
        let f = Expr::sum(
            Expr::sum(
                Expr::pow(x(), Expr::integer(2)),
                Expr::mul(Expr::integer(2), x()),
            ),
            Expr::integer(1),
        );
        let df = d(&f);
        assert_eq!(df, Expr::sum(Expr::mul(Expr::integer(2), x()), Expr::integer(2)));
        assert_eq!(df.to_string(), "2 * x + 2");

        assert_eq!(
            d(&Expr::pow(x(), Expr::integer(4))),
            Expr::mul(Expr::integer(4), Expr::pow(x(), Expr::integer(3)))
        );
    }

    #[test]
    fn test_trigonometric() {
        assert_eq!(d(&Expr::sin(x())), Expr::cos(x()));

        let df = d(&Expr::cos(Expr::pow(x(), Expr::integer(3))));
        assert_eq!(df.to_string(), "-3 * sin(x^3) * x^2");

        let two_x = Expr::mul(Expr::integer(2), x());
        assert_eq!(
            d(&Expr::tan(two_x.clone())),
            Expr::div(Expr::integer(2), Expr::pow(Expr::cos(two_x), Expr::integer(2)))
        );
    }

    #[test]
    fn test_cotangent() {
        let df = d(&Expr::cotan(two_x()));
        assert_eq!(df.to_string(), "-2 / sin(2 * x)^2");
    }

    #[test]
    fn test_secant_and_cosecant() {
        assert_eq!(
            d(&Expr::sec(x())),
            Expr::mul(Expr::sec(x()), Expr::tan(x())).simplify()
        );
        assert_eq!(
            d(&Expr::cosec(x())),
            Expr::mul(Expr::neg(Expr::cosec(x())), Expr::cotan(x())).simplify()
        );
    }

    #[test]
    fn test_inverse_sine_and_cosine() {
        let one_minus_square = Expr::minus(Expr::integer(1), Expr::pow(x(), Expr::integer(2)));
        assert_eq!(
            d(&Expr::arcsin(x())),
            Expr::div(Expr::integer(1), Expr::sqrt(one_minus_square))
        );
        // 1 / sqrt(1 - 9/25) = 5/4
        assert_eq!(at(&d(&Expr::arcsin(x())), Expr::rational(3, 5)), Expr::rational(5, 4));

        // Chain rule through 2x, evaluated at x = 3/10
        assert_eq!(at(&d(&Expr::arcsin(two_x())), Expr::rational(3, 10)), Expr::rational(5, 2));
        assert_eq!(at(&d(&Expr::arccos(two_x())), Expr::rational(3, 10)), Expr::rational(-5, 2));
    }

    #[test]
    fn test_inverse_tangent_and_cotangent() {
        // 2 / (1 + (2x)^2) at x = 1/2
        assert_eq!(at(&d(&Expr::arctan(two_x())), Expr::rational(1, 2)), Expr::integer(1));
        assert_eq!(at(&d(&Expr::arccotan(two_x())), Expr::rational(1, 2)), Expr::integer(-1));
        assert_eq!(at(&d(&Expr::arctan(x())), Expr::integer(3)), Expr::rational(1, 10));
    }

    #[test]
    fn test_logarithm_with_explicit_base() {
        let two = Expr::integer(2);
        let df = d(&Expr::log(two.clone(), x()));
        assert_eq!(
            df,
            Expr::div(Expr::integer(1), Expr::mul(x(), Expr::ln(two.clone()))).simplify()
        );
        // Variable base goes through the quotient rule, still in closed form
        let df = d(&Expr::log(x(), two));
        assert!(
            !df.nodes().any(|n| matches!(n.kind(), ExprKind::Derivative { .. })),
            "left unevaluated: {}",
            df
        );
    }

    #[test]
    fn test_power_with_nan_exponent() {
        let f = Expr::pow(Expr::integer(21), Expr::nan());
        assert!(d(&f).is_nan());
    }

    #[test]
    fn test_variable_base_and_exponent() {
        // (x^x)' = x^x * (ln(x) + 1): the x * 1/x term cancels
        let f = Expr::pow(x(), x());
        let expected = Expr::mul(f.clone(), Expr::sum(Expr::ln(x()), Expr::integer(1)));
        assert_eq!(d(&f), expected.simplify());
    }

    #[test]
    fn test_exponential_is_its_own_derivative() {
        let f = Expr::pow(Expr::e(), x());
        assert_eq!(d(&f), f);
    }

    #[test]
    fn test_abs_and_signum() {
        let shifted = Expr::sum(x(), Expr::integer(2));
        assert_eq!(d(&Expr::abs(shifted.clone())), Expr::signum(shifted.clone()));

        let sign = Expr::signum(shifted);
        assert_eq!(d(&sign), Expr::derivative(sign.clone(), x(), 1));
    }

    #[test]
    fn test_opaque_derivative_does_not_collapse() {
        let inner = Expr::derivative(Expr::sum(x(), Expr::integer(2)), Expr::var("y"), 1);
        let out = inner.differentiate(&x());
        assert_eq!(out, Expr::derivative(inner.clone(), x(), 1));
        assert!(out.as_number().is_none());

        // Same variable nests instead of cancelling
        let same = Expr::derivative(Expr::call("f", vec![x()]), x(), 1);
        assert_eq!(
            same.differentiate(&x()),
            Expr::derivative(same.clone(), x(), 1)
        );
    }

    #[test]
    fn test_nested_derivatives_merge_when_simplified() {
        let f = Expr::call("f", vec![x()]);
        let nested = Expr::derivative(Expr::derivative(f.clone(), x(), 1), x(), 1);
        assert_eq!(nested.simplify(), Expr::derivative(f, x(), 2));
    }

    #[test]
    fn test_user_function() {
        let f = Expr::call("f", vec![x()]);
        assert_eq!(f.differentiate(&x()), Expr::derivative(f.clone(), x(), 1));
        // Independent of the variable
        let g = Expr::call("g", vec![Expr::var("y")]);
        assert_eq!(g.differentiate(&x()), Expr::integer(0));
    }

    #[test]
    fn test_non_finite_input() {
        assert!(Expr::nan().differentiate(&x()).is_nan());
        let e = Expr::mul(x(), Expr::positive_infinity());
        assert!(e.differentiate(&x()).is_nan());
    }

    #[test]
    fn test_constant_and_other_variables() {
        assert_eq!(d(&Expr::var("y")), Expr::integer(0));
        assert_eq!(d(&Expr::pi()), Expr::integer(0));
        let e = Expr::mul(Expr::var("a"), x());
        assert_eq!(d(&e), Expr::var("a"));
    }

    #[test]
    fn test_evaluates_derivative_nodes_with_closed_form() {
        let node = Expr::derivative(Expr::pow(x(), Expr::integer(3)), x(), 2);
        assert_eq!(node.simplify(), Expr::mul(Expr::integer(6), x()));
    }

    #[test]
    fn test_statements_stay_symbolic() {
        let stmt = Expr::less(x(), Expr::integer(1));
        assert_eq!(
            stmt.differentiate(&x()),
            Expr::derivative(stmt.clone(), x(), 1)
        );
    }
}
