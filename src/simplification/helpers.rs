use crate::core::settings::Settings;
use crate::{Expr, ExprKind, Number};

/// Flatten nested multiplication into a list of factors
pub(crate) fn flatten_mul(expr: &Expr) -> Vec<Expr> {
    let mut factors = Vec::new();
    let mut stack = vec![expr.clone()];
    while let Some(current) = stack.pop() {
        if let ExprKind::Mul(a, b) = current.kind() {
            // Right pushed first so the left factor comes out first
            stack.push(b.clone());
            stack.push(a.clone());
        } else {
            factors.push(current);
        }
    }
    factors
}

/// Helper: Flatten nested sums and differences into signed terms.
/// `a - (b + c)` yields `[(a, +), (b, -), (c, -)]`.
pub(crate) fn flatten_terms(expr: &Expr) -> Vec<(Expr, bool)> {
    let mut terms = Vec::new();
    let mut stack = vec![(expr.clone(), true)];
    while let Some((current, positive)) = stack.pop() {
        match current.kind() {
            ExprKind::Sum(a, b) => {
                stack.push((b.clone(), positive));
                stack.push((a.clone(), positive));
            }
            ExprKind::Minus(a, b) => {
                stack.push((b.clone(), !positive));
                stack.push((a.clone(), positive));
            }
            _ => terms.push((current, positive)),
        }
    }
    terms
}

/// Helper: Rebuild multiplication tree (left-associative)
pub(crate) fn rebuild_mul(factors: Vec<Expr>) -> Expr {
    let mut iter = factors.into_iter();
    match iter.next() {
        None => Expr::integer(1),
        Some(first) => iter.fold(first, Expr::mul),
    }
}

/// Split a term into its numeric coefficient and the remaining product.
/// e.g. 2*x*y -> (2, Some(x*y)),  x -> (1, Some(x)),  5 -> (5, None)
pub(crate) fn split_term(term: &Expr, settings: &Settings) -> (Number, Option<Expr>) {
    let mut coefficient = Number::integer(1);
    let mut rest = Vec::new();
    for factor in flatten_mul(term) {
        match factor.as_number() {
            Some(n) => coefficient = coefficient.mul_with(n, settings),
            None => rest.push(factor),
        }
    }
    if rest.is_empty() {
        (coefficient, None)
    } else {
        (coefficient, Some(rebuild_mul(rest)))
    }
}

/// `coefficient * rest` without a unit coefficient
pub(crate) fn scale(coefficient: Number, rest: Expr) -> Expr {
    if coefficient.is_one() {
        rest
    } else {
        Expr::mul(Expr::number(coefficient), rest)
    }
}

/// Split a factor into base and exponent: x^n -> (x, n), x -> (x, 1)
pub(crate) fn base_and_exponent(factor: &Expr) -> (Expr, Expr) {
    match factor.kind() {
        ExprKind::Pow(base, exp) => (base.clone(), exp.clone()),
        _ => (factor.clone(), Expr::integer(1)),
    }
}

/// `x` for exponent 1, `x^n` otherwise
pub(crate) fn power(base: Expr, exponent: Expr) -> Expr {
    if exponent.is_one() {
        base
    } else {
        Expr::pow(base, exponent)
    }
}

/// The argument of a one-argument built-in call of the given kind
pub(crate) fn unary_arg<'a>(expr: &'a Expr, want: &crate::Func) -> Option<&'a Expr> {
    match expr.kind() {
        ExprKind::Function { func, args } if func == want && args.len() == 1 => Some(&args[0]),
        _ => None,
    }
}

/// `-1 * x` -> `x`
pub(crate) fn negated_operand(expr: &Expr) -> Option<&Expr> {
    match expr.kind() {
        ExprKind::Mul(a, b) if a.as_number().is_some_and(|n| n.neg().is_one()) => Some(b),
        _ => None,
    }
}
