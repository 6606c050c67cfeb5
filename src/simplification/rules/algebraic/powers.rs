use crate::simplification::rules::NodeKind;
use crate::{Expr, ExprKind, Number};
use num_integer::Integer;
use num_traits::{One, Signed};

rule!(
    PowerPowerRule,
    "power_power",
    75,
    Algebraic,
    &[NodeKind::Pow],
    |expr: &Expr, context: &RuleContext| {
        let ExprKind::Pow(u, v) = expr.kind() else {
            return None;
        };
        let ExprKind::Pow(base, exp_inner) = u.kind() else {
            return None;
        };
        let outer = v.as_number()?;

        // (x^n)^(1/n) = |x| for even n
        if let (Some(inner_n), Number::Rational(r)) = (exp_inner.as_number(), outer)
            && inner_n.as_integer().is_some_and(|n| n.is_positive() && n.is_even())
            && r.numer().is_one()
            && Some(r.denom()) == inner_n.as_integer()
        {
            return Some(Expr::abs(base.clone()));
        }

        // (x^a)^n = x^(a*n) only for integer n
        if !outer.is_integer() {
            return None;
        }
        let exponent = match exp_inner.as_number() {
            Some(a) => Expr::number(a.mul_with(outer, &context.settings)),
            None => Expr::mul(v.clone(), exp_inner.clone()),
        };
        Some(Expr::pow(base.clone(), exponent))
    }
);
