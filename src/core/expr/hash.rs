//! Structural hashing.
//!
//! Children contribute their precomputed hash, so hashing a new node is O(1)
//! in the size of its subtree.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

use super::ExprKind;

/// Structural hash of a node kind
pub fn compute_expr_hash(kind: &ExprKind) -> u64 {
    let mut hasher = FxHasher::default();
    kind.hash(&mut hasher);
    hasher.finish()
}

impl Hash for ExprKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ExprKind::Number(n) => n.hash(state),
            ExprKind::Variable(s) => s.hash(state),
            ExprKind::Boolean(b) => b.hash(state),
            ExprKind::Function { func, args } => {
                func.hash(state);
                args.hash(state);
            }
            ExprKind::Derivative { expr, var, order } => {
                expr.hash(state);
                var.hash(state);
                order.hash(state);
            }
            ExprKind::Not(a) => a.hash(state),
            ExprKind::Sum(a, b)
            | ExprKind::Minus(a, b)
            | ExprKind::Mul(a, b)
            | ExprKind::Div(a, b)
            | ExprKind::Pow(a, b)
            | ExprKind::And(a, b)
            | ExprKind::Or(a, b)
            | ExprKind::Xor(a, b)
            | ExprKind::Implies(a, b)
            | ExprKind::Equals(a, b)
            | ExprKind::Greater(a, b)
            | ExprKind::GreaterOrEqual(a, b)
            | ExprKind::Less(a, b)
            | ExprKind::LessOrEqual(a, b)
            | ExprKind::In(a, b) => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}
