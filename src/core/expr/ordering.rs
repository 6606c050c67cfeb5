//! Canonical ordering for expressions.
//!
//! Used by the simplifier to put the factors of a product in a stable order.

use std::cmp::Ordering as CmpOrdering;

use super::{Expr, ExprKind, Func};

/// Sort rank of the node variant.
/// Order: Numbers < Booleans < Variables < Sum/Minus < functions < Pow < Mul < Div < statements
fn rank(kind: &ExprKind) -> u8 {
    match kind {
        ExprKind::Number(_) => 0,
        ExprKind::Boolean(_) => 1,
        ExprKind::Variable(_) => 2,
        ExprKind::Sum(..) => 3,
        ExprKind::Minus(..) => 4,
        ExprKind::Function { .. } => 5,
        ExprKind::Derivative { .. } => 6,
        ExprKind::Pow(..) => 7,
        ExprKind::Mul(..) => 8,
        ExprKind::Div(..) => 9,
        ExprKind::Not(_) => 10,
        ExprKind::And(..) => 11,
        ExprKind::Or(..) => 12,
        ExprKind::Xor(..) => 13,
        ExprKind::Implies(..) => 14,
        ExprKind::Equals(..) => 15,
        ExprKind::Greater(..) => 16,
        ExprKind::GreaterOrEqual(..) => 17,
        ExprKind::Less(..) => 18,
        ExprKind::LessOrEqual(..) => 19,
        ExprKind::In(..) => 20,
    }
}

fn func_rank(func: &Func) -> u8 {
    match func {
        Func::Sin => 0,
        Func::Cos => 1,
        Func::Tan => 2,
        Func::Cotan => 3,
        Func::Sec => 4,
        Func::Cosec => 5,
        Func::Arcsin => 6,
        Func::Arccos => 7,
        Func::Arctan => 8,
        Func::Arccotan => 9,
        Func::Log => 10,
        Func::Abs => 11,
        Func::Signum => 12,
        Func::Custom(_) => 13,
    }
}

/// Total order on expressions for canonical sorting
pub fn expr_cmp(a: &Expr, b: &Expr) -> CmpOrdering {
    let by_rank = rank(a.kind()).cmp(&rank(b.kind()));
    if by_rank != CmpOrdering::Equal {
        return by_rank;
    }

    match (a.kind(), b.kind()) {
        (ExprKind::Number(x), ExprKind::Number(y)) => x
            .compare(y)
            .unwrap_or_else(|| x.to_string().cmp(&y.to_string())),
        (ExprKind::Boolean(x), ExprKind::Boolean(y)) => x.cmp(y),
        (ExprKind::Variable(x), ExprKind::Variable(y)) => x.cmp(y),
        (ExprKind::Function { func: f, args: xs }, ExprKind::Function { func: g, args: ys }) => {
            func_rank(f)
                .cmp(&func_rank(g))
                .then_with(|| match (f, g) {
                    (Func::Custom(p), Func::Custom(q)) => p.cmp(q),
                    _ => CmpOrdering::Equal,
                })
                .then_with(|| cmp_children(xs, ys))
        }
        (
            ExprKind::Derivative { order: p, .. },
            ExprKind::Derivative { order: q, .. },
        ) => p
            .cmp(q)
            .then_with(|| cmp_children(a.direct_children(), b.direct_children())),
        _ => cmp_children(a.direct_children(), b.direct_children()),
    }
}

fn cmp_children(xs: &[Expr], ys: &[Expr]) -> CmpOrdering {
    for (x, y) in xs.iter().zip(ys) {
        let c = expr_cmp(x, y);
        if c != CmpOrdering::Equal {
            return c;
        }
    }
    xs.len().cmp(&ys.len())
}
