use crate::simplification::rules::NodeKind;
use crate::{Expr, ExprKind};

rule!(
    AddZeroRule,
    "add_zero",
    100,
    Algebraic,
    &[NodeKind::Sum],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Sum(u, v) = expr.kind() {
            if u.is_zero() {
                return Some(v.clone());
            }
            if v.is_zero() {
                return Some(u.clone());
            }
        }
        None
    }
);

rule!(
    SubZeroRule,
    "sub_zero",
    100,
    Algebraic,
    &[NodeKind::Minus],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Minus(u, v) = expr.kind()
            && v.is_zero()
        {
            return Some(u.clone());
        }
        None
    }
);

rule!(
    ZeroMinusRule,
    "zero_minus",
    100,
    Algebraic,
    &[NodeKind::Minus],
    |expr: &Expr, _context: &RuleContext| {
        // 0 - x = -1 * x
        if let ExprKind::Minus(u, v) = expr.kind()
            && u.is_zero()
        {
            return Some(Expr::neg(v.clone()));
        }
        None
    }
);

rule!(
    SubSelfRule,
    "sub_self",
    100,
    Algebraic,
    &[NodeKind::Minus],
    |expr: &Expr, _context: &RuleContext| {
        // Infinite operands stay put: oo - oo is not 0
        if let ExprKind::Minus(u, v) = expr.kind()
            && u == v
            && u.is_finite()
        {
            return Some(Expr::integer(0));
        }
        None
    }
);

rule!(
    MulZeroRule,
    "mul_zero",
    100,
    Algebraic,
    &[NodeKind::Mul],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Mul(u, v) = expr.kind()
            && (u.is_zero() || v.is_zero())
            && u.is_finite()
            && v.is_finite()
        {
            return Some(Expr::integer(0));
        }
        None
    }
);

rule!(
    MulOneRule,
    "mul_one",
    100,
    Algebraic,
    &[NodeKind::Mul],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Mul(u, v) = expr.kind() {
            if u.is_one() {
                return Some(v.clone());
            }
            if v.is_one() {
                return Some(u.clone());
            }
        }
        None
    }
);

rule!(
    DivOneRule,
    "div_one",
    100,
    Algebraic,
    &[NodeKind::Div],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Div(u, v) = expr.kind()
            && v.is_one()
        {
            return Some(u.clone());
        }
        None
    }
);

rule!(
    ZeroDivRule,
    "zero_div",
    100,
    Algebraic,
    &[NodeKind::Div],
    alters_domain: true,
    |expr: &Expr, _context: &RuleContext| {
        // 0 / x = 0 (undefined at x = 0)
        if let ExprKind::Div(u, v) = expr.kind()
            && u.is_zero()
            && !v.is_zero()
            && v.is_finite()
        {
            return Some(Expr::integer(0));
        }
        None
    }
);

rule!(
    DivSelfRule,
    "div_self",
    100,
    Algebraic,
    &[NodeKind::Div],
    alters_domain: true,
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Div(u, v) = expr.kind()
            && u == v
            && !u.is_zero()
            && u.is_finite()
        {
            return Some(Expr::integer(1));
        }
        None
    }
);

rule!(
    PowZeroRule,
    "pow_zero",
    100,
    Algebraic,
    &[NodeKind::Pow],
    alters_domain: true,
    |expr: &Expr, _context: &RuleContext| {
        // x^0 = 1 (0^0 is taken as 1 as well)
        if let ExprKind::Pow(u, v) = expr.kind()
            && v.is_zero()
            && u.is_finite()
        {
            return Some(Expr::integer(1));
        }
        None
    }
);

rule!(
    PowOneRule,
    "pow_one",
    100,
    Algebraic,
    &[NodeKind::Pow],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Pow(u, v) = expr.kind()
            && v.is_one()
        {
            return Some(u.clone());
        }
        None
    }
);

rule!(
    OnePowRule,
    "one_pow",
    100,
    Algebraic,
    &[NodeKind::Pow],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Pow(u, v) = expr.kind()
            && u.is_one()
            && v.is_finite()
        {
            return Some(Expr::integer(1));
        }
        None
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplification::rules::{Rule, RuleContext};

    fn ctx() -> RuleContext {
        RuleContext::default()
    }

    #[test]
    fn test_additive_identities() {
        let x = Expr::var("x");
        assert_eq!(
            AddZeroRule.apply(&Expr::sum(Expr::integer(0), x.clone()), &ctx()),
            Some(x.clone())
        );
        assert_eq!(
            SubSelfRule.apply(&Expr::minus(x.clone(), x.clone()), &ctx()),
            Some(Expr::integer(0))
        );
        assert_eq!(
            ZeroMinusRule.apply(&Expr::minus(Expr::integer(0), x.clone()), &ctx()),
            Some(Expr::neg(x))
        );
    }

    #[test]
    fn test_infinities_do_not_cancel() {
        let inf = Expr::positive_infinity();
        assert_eq!(SubSelfRule.apply(&Expr::minus(inf.clone(), inf.clone()), &ctx()), None);
        assert_eq!(MulZeroRule.apply(&Expr::mul(Expr::integer(0), inf), &ctx()), None);
    }

    #[test]
    fn test_div_self_alters_domain() {
        let x = Expr::var("x");
        let e = Expr::div(x.clone(), x);
        assert!(DivSelfRule.alters_domain());
        assert_eq!(DivSelfRule.apply(&e, &ctx()), Some(Expr::integer(1)));
        assert!(!MulOneRule.alters_domain());
    }
}
