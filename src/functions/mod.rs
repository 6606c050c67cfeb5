//! Centralized function registry
//!
//! Single source of truth for the built-in functions: their names, LaTeX
//! commands, arity and derivative formulas.

use crate::Expr;

pub(crate) mod definitions;
pub(crate) mod registry;

// ===== Helpers for building derivative expressions =====

/// `-1 * e`
pub(crate) fn neg(e: Expr) -> Expr {
    Expr::neg(e)
}

/// Chain rule: `outer * u'`
pub(crate) fn chain(outer: Expr, u_prime: &Expr) -> Expr {
    Expr::mul(outer, u_prime.clone())
}

/// `1 ± u^2` building block of the inverse trigonometric derivatives
pub(crate) fn one_and_square(u: &Expr, plus: bool) -> Expr {
    let square = Expr::pow(u.clone(), Expr::integer(2));
    if plus {
        Expr::sum(Expr::integer(1), square)
    } else {
        Expr::minus(Expr::integer(1), square)
    }
}
