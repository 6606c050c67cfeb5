use crate::simplification::helpers::negated_operand;
use crate::simplification::rules::NodeKind;
use crate::{Expr, ExprKind, Func};

rule!(
    TrigZeroRule,
    "trig_zero",
    95,
    Trigonometric,
    &[NodeKind::Function],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Function { func, args } = expr.kind()
            && args.len() == 1
            && args[0].is_zero()
        {
            return match func {
                Func::Sin | Func::Tan | Func::Arcsin | Func::Arctan => Some(Expr::integer(0)),
                Func::Cos | Func::Sec => Some(Expr::integer(1)),
                _ => None,
            };
        }
        None
    }
);

rule!(
    OddFunctionRule,
    "odd_function",
    90,
    Trigonometric,
    &[NodeKind::Function],
    |expr: &Expr, _context: &RuleContext| {
        // f(-x) = -f(x)
        if let ExprKind::Function { func, args } = expr.kind()
            && matches!(
                func,
                Func::Sin | Func::Tan | Func::Cotan | Func::Cosec | Func::Arcsin | Func::Arctan
            )
            && args.len() == 1
            && let Some(inner) = negated_operand(&args[0])
        {
            return Some(Expr::neg(Expr::function(func.clone(), vec![inner.clone()])));
        }
        None
    }
);

rule!(
    EvenFunctionRule,
    "even_function",
    90,
    Trigonometric,
    &[NodeKind::Function],
    |expr: &Expr, _context: &RuleContext| {
        // f(-x) = f(x)
        if let ExprKind::Function { func, args } = expr.kind()
            && matches!(func, Func::Cos | Func::Sec | Func::Abs)
            && args.len() == 1
            && let Some(inner) = negated_operand(&args[0])
        {
            return Some(Expr::function(func.clone(), vec![inner.clone()]));
        }
        None
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplification::rules::{Rule, RuleContext};

    #[test]
    fn test_values_at_zero() {
        let ctx = RuleContext::default();
        let zero = Expr::integer(0);
        assert_eq!(TrigZeroRule.apply(&Expr::sin(zero.clone()), &ctx), Some(Expr::integer(0)));
        assert_eq!(TrigZeroRule.apply(&Expr::cos(zero.clone()), &ctx), Some(Expr::integer(1)));
        assert_eq!(TrigZeroRule.apply(&Expr::arccos(zero), &ctx), None);
    }

    #[test]
    fn test_parity() {
        let ctx = RuleContext::default();
        let x = Expr::var("x");
        let minus_x = Expr::neg(x.clone());
        assert_eq!(
            OddFunctionRule.apply(&Expr::sin(minus_x.clone()), &ctx),
            Some(Expr::neg(Expr::sin(x.clone())))
        );
        assert_eq!(
            EvenFunctionRule.apply(&Expr::cos(minus_x.clone()), &ctx),
            Some(Expr::cos(x))
        );
        assert_eq!(OddFunctionRule.apply(&Expr::cos(minus_x), &ctx), None);
    }
}
