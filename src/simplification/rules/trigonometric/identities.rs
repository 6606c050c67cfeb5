use crate::simplification::helpers::unary_arg;
use crate::simplification::rules::NodeKind;
use crate::{Expr, ExprKind, Func};

/// `f(u)^2` -> `u`
fn squared_arg<'a>(expr: &'a Expr, func: &Func) -> Option<&'a Expr> {
    match expr.kind() {
        ExprKind::Pow(base, exp) if exp.as_number().and_then(|n| n.to_i64()) == Some(2) => {
            unary_arg(base, func)
        }
        _ => None,
    }
}

rule!(
    PythagoreanIdentityRule,
    "pythagorean_identity",
    85,
    Trigonometric,
    &[NodeKind::Sum],
    |expr: &Expr, _context: &RuleContext| {
        // sin(u)^2 + cos(u)^2 = 1
        let ExprKind::Sum(a, b) = expr.kind() else {
            return None;
        };
        let matches = |s: &Expr, c: &Expr| {
            squared_arg(s, &Func::Sin)
                .zip(squared_arg(c, &Func::Cos))
                .is_some_and(|(u, v)| u == v)
        };
        (matches(a, b) || matches(b, a)).then(|| Expr::integer(1))
    }
);
