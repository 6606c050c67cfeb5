use crate::simplification::rules::{NodeKind, Rule};
use crate::{Expr, ExprKind};
use std::sync::Arc;

rule!(
    MergeNestedDerivativeRule,
    "merge_nested_derivative",
    65,
    Calculus,
    &[NodeKind::Derivative],
    |expr: &Expr, _context: &RuleContext| {
        // d/dx (d^m/dx^m f) = d^(m+1)/dx^(m+1) f
        if let ExprKind::Derivative {
            expr: inner,
            var,
            order,
        } = expr.kind()
            && let ExprKind::Derivative {
                expr: f,
                var: inner_var,
                order: inner_order,
            } = inner.kind()
            && var == inner_var
        {
            let merged = order.checked_add(*inner_order)?;
            return Some(Expr::derivative(f.clone(), var.clone(), merged));
        }
        None
    }
);

rule!(
    EvaluateDerivativeRule,
    "evaluate_derivative",
    60,
    Calculus,
    &[NodeKind::Derivative],
    |expr: &Expr, _context: &RuleContext| {
        let ExprKind::Derivative { expr: f, var, order } = expr.kind() else {
            return None;
        };
        let once = f.differentiate(var);
        // No closed form: differentiation only wrapped the node again
        if once == Expr::derivative(f.clone(), var.clone(), 1) {
            return None;
        }
        Some(once.differentiate_n(var, order.saturating_sub(1)))
    }
);

/// Get all calculus rules in priority order
pub(crate) fn get_calculus_rules() -> Vec<Arc<dyn Rule + Send + Sync>> {
    vec![
        Arc::new(MergeNestedDerivativeRule),
        Arc::new(EvaluateDerivativeRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplification::rules::RuleContext;

    #[test]
    fn test_merge_same_variable_only() {
        let ctx = RuleContext::default();
        let x = Expr::var("x");
        let y = Expr::var("y");
        let f = Expr::call("f", vec![x.clone(), y.clone()]);
        let nested = Expr::derivative(Expr::derivative(f.clone(), x.clone(), 1), x.clone(), 2);
        assert_eq!(
            MergeNestedDerivativeRule.apply(&nested, &ctx),
            Some(Expr::derivative(f.clone(), x.clone(), 3))
        );
        let mixed = Expr::derivative(Expr::derivative(f, y, 1), x, 1);
        assert_eq!(MergeNestedDerivativeRule.apply(&mixed, &ctx), None);
    }

    #[test]
    fn test_evaluate_closed_form_only() {
        let ctx = RuleContext::default();
        let x = Expr::var("x");
        let closed = Expr::derivative(Expr::sin(x.clone()), x.clone(), 1);
        assert!(EvaluateDerivativeRule.apply(&closed, &ctx).is_some());

        let opaque = Expr::derivative(Expr::signum(x.clone()), x.clone(), 2);
        assert_eq!(EvaluateDerivativeRule.apply(&opaque, &ctx), None);
    }
}
