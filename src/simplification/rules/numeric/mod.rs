use crate::simplification::rules::{NodeKind, Rule, RuleCategory, RuleContext};
use crate::{Expr, ExprKind, Func, Number};
use std::sync::Arc;

/// Numeric simplification rules
pub mod rules {
    use super::*;

    /// Fold an arithmetic node whose operands are both numbers:
    /// 2 + 3 = 5, 1 / 0 = NaN, 4^(1/2) = 2
    pub struct FoldArithmeticRule;

    impl Rule for FoldArithmeticRule {
        fn name(&self) -> &'static str {
            "fold_arithmetic"
        }

        fn priority(&self) -> i32 {
            200
        }

        fn category(&self) -> RuleCategory {
            RuleCategory::Numeric
        }

        fn applies_to(&self) -> &'static [NodeKind] {
            &[
                NodeKind::Sum,
                NodeKind::Minus,
                NodeKind::Mul,
                NodeKind::Div,
                NodeKind::Pow,
            ]
        }

        fn apply(&self, expr: &Expr, context: &RuleContext) -> Option<Expr> {
            let settings = context.settings.as_ref();
            let folded = match expr.kind() {
                ExprKind::Sum(a, b) => a.as_number()?.add_with(b.as_number()?, settings),
                ExprKind::Minus(a, b) => a.as_number()?.sub_with(b.as_number()?, settings),
                ExprKind::Mul(a, b) => a.as_number()?.mul_with(b.as_number()?, settings),
                ExprKind::Div(a, b) => a.as_number()?.div_with(b.as_number()?, settings),
                ExprKind::Pow(a, b) => a.as_number()?.checked_pow_with(b.as_number()?, settings)?,
                _ => return None,
            };
            Some(Expr::number(folded))
        }
    }

    rule!(
        FoldAbsRule,
        "fold_abs",
        200,
        Numeric,
        &[NodeKind::Function],
        |expr: &Expr, context: &RuleContext| {
            let n = abs_or_sign_arg(expr, &Func::Abs)?;
            n.abs_with(&context.settings).map(Expr::number)
        }
    );

    rule!(
        FoldSignumRule,
        "fold_signum",
        200,
        Numeric,
        &[NodeKind::Function],
        |expr: &Expr, _context: &RuleContext| {
            let n = abs_or_sign_arg(expr, &Func::Signum)?;
            n.signum().map(Expr::number)
        }
    );

    fn abs_or_sign_arg<'a>(expr: &'a Expr, want: &Func) -> Option<&'a Number> {
        match expr.kind() {
            ExprKind::Function { func, args } if func == want && args.len() == 1 => {
                args[0].as_number()
            }
            _ => None,
        }
    }
}

/// Get all numeric rules in priority order
pub(crate) fn get_numeric_rules() -> Vec<Arc<dyn Rule + Send + Sync>> {
    vec![
        Arc::new(rules::FoldArithmeticRule),
        Arc::new(rules::FoldAbsRule),
        Arc::new(rules::FoldSignumRule),
    ]
}
