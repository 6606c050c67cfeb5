use crate::simplification::rules::NodeKind;
use crate::{Expr, ExprKind};
use std::cmp::Ordering;

rule!(
    FoldNotRule,
    "fold_not",
    200,
    Logic,
    &[NodeKind::Not],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Not(a) = expr.kind() {
            return a.as_bool().map(|b| Expr::boolean(!b));
        }
        None
    }
);

rule!(
    FoldConnectiveRule,
    "fold_connective",
    200,
    Logic,
    &[NodeKind::And, NodeKind::Or, NodeKind::Xor, NodeKind::Implies],
    |expr: &Expr, _context: &RuleContext| {
        let (a, b) = match expr.kind() {
            ExprKind::And(a, b)
            | ExprKind::Or(a, b)
            | ExprKind::Xor(a, b)
            | ExprKind::Implies(a, b) => (a, b),
            _ => return None,
        };
        // Both operands must already be literals, even when one side decides
        let (x, y) = (a.as_bool()?, b.as_bool()?);
        let value = match expr.kind() {
            ExprKind::And(..) => x && y,
            ExprKind::Or(..) => x || y,
            ExprKind::Xor(..) => x != y,
            _ => !x || y,
        };
        Some(Expr::boolean(value))
    }
);

rule!(
    FoldEqualsRule,
    "fold_equals",
    200,
    Logic,
    &[NodeKind::Equals],
    |expr: &Expr, _context: &RuleContext| {
        let ExprKind::Equals(a, b) = expr.kind() else {
            return None;
        };
        if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
            // NaN is unequal to everything, itself included
            if x.is_nan() || y.is_nan() {
                return Some(Expr::boolean(false));
            }
            return match x.compare(y) {
                Some(order) => Some(Expr::boolean(order == Ordering::Equal)),
                None => Some(Expr::boolean(x == y)),
            };
        }
        if let (Some(x), Some(y)) = (a.as_bool(), b.as_bool()) {
            return Some(Expr::boolean(x == y));
        }
        // Structurally identical sides
        if a == b && a.is_finite() {
            return Some(Expr::boolean(true));
        }
        None
    }
);

rule!(
    FoldComparisonRule,
    "fold_comparison",
    200,
    Logic,
    &[
        NodeKind::Greater,
        NodeKind::GreaterOrEqual,
        NodeKind::Less,
        NodeKind::LessOrEqual,
    ],
    |expr: &Expr, _context: &RuleContext| {
        let (a, b, accept): (&Expr, &Expr, fn(Ordering) -> bool) = match expr.kind() {
            ExprKind::Greater(a, b) => (a, b, Ordering::is_gt),
            ExprKind::GreaterOrEqual(a, b) => (a, b, Ordering::is_ge),
            ExprKind::Less(a, b) => (a, b, Ordering::is_lt),
            ExprKind::LessOrEqual(a, b) => (a, b, Ordering::is_le),
            _ => return None,
        };
        // Only real-valued numbers are ordered
        let order = a.as_number()?.compare(b.as_number()?)?;
        Some(Expr::boolean(accept(order)))
    }
);
