//! Connective identities.
//!
//! Every rule shares one priority, so they are tried in load order (see
//! `get_logic_rules`). Bound operands must be boolean-typed: a statement or
//! a variable.

use crate::simplification::rules::NodeKind;
use crate::{Expr, ExprKind};

fn is_logic(operands: &[&Expr]) -> bool {
    operands.iter().all(|e| e.is_logic())
}

fn negated(expr: &Expr) -> Option<&Expr> {
    match expr.kind() {
        ExprKind::Not(a) => Some(a),
        _ => None,
    }
}

/// Whether `b` is `¬a`
fn is_negation_of(b: &Expr, a: &Expr) -> bool {
    negated(b).is_some_and(|inner| inner == a)
}

rule!(
    FalseImpliesRule,
    "false_implies",
    110,
    Boolean,
    &[NodeKind::Implies],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Implies(a, b) = expr.kind()
            && a.as_bool() == Some(false)
            && b.is_logic()
        {
            return Some(Expr::boolean(true));
        }
        None
    }
);

rule!(
    AndOfNegationsRule,
    "and_of_negations",
    110,
    Boolean,
    &[NodeKind::And],
    |expr: &Expr, _context: &RuleContext| {
        // ¬a ∧ ¬b = ¬(a ∨ b)
        if let ExprKind::And(x, y) = expr.kind()
            && let (Some(a), Some(b)) = (negated(x), negated(y))
            && is_logic(&[a, b])
        {
            return Some(Expr::not(Expr::or(a.clone(), b.clone())));
        }
        None
    }
);

rule!(
    OrOfNegationsRule,
    "or_of_negations",
    110,
    Boolean,
    &[NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        // ¬a ∨ ¬b = ¬(a ∧ b)
        if let ExprKind::Or(x, y) = expr.kind()
            && let (Some(a), Some(b)) = (negated(x), negated(y))
            && is_logic(&[a, b])
        {
            return Some(Expr::not(Expr::and(a.clone(), b.clone())));
        }
        None
    }
);

rule!(
    ExcludedMiddleRule,
    "excluded_middle",
    110,
    Boolean,
    &[NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Or(x, y) = expr.kind()
            && (is_negation_of(x, y) || is_negation_of(y, x))
            && is_logic(&[x, y])
        {
            return Some(Expr::boolean(true));
        }
        None
    }
);

rule!(
    ContradictionRule,
    "contradiction",
    110,
    Boolean,
    &[NodeKind::And],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::And(x, y) = expr.kind()
            && (is_negation_of(x, y) || is_negation_of(y, x))
            && is_logic(&[x, y])
        {
            return Some(Expr::boolean(false));
        }
        None
    }
);

rule!(
    OrNotToImpliesRule,
    "or_not_to_implies",
    110,
    Boolean,
    &[NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        // ¬a ∨ b = a → b
        if let ExprKind::Or(x, b) = expr.kind()
            && let Some(a) = negated(x)
            && is_logic(&[a, b])
        {
            return Some(Expr::implies(a.clone(), b.clone()));
        }
        None
    }
);

rule!(
    IdempotenceRule,
    "idempotence",
    110,
    Boolean,
    &[NodeKind::And, NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        match expr.kind() {
            ExprKind::And(a, b) | ExprKind::Or(a, b) if a == b && a.is_logic() => Some(a.clone()),
            _ => None,
        }
    }
);

rule!(
    SelfImplicationRule,
    "self_implication",
    110,
    Boolean,
    &[NodeKind::Implies, NodeKind::Xor],
    |expr: &Expr, _context: &RuleContext| {
        match expr.kind() {
            ExprKind::Implies(a, b) if a == b && a.is_logic() => Some(Expr::boolean(true)),
            ExprKind::Xor(a, b) if a == b && a.is_logic() => Some(Expr::boolean(false)),
            _ => None,
        }
    }
);

rule!(
    DoubleNegationRule,
    "double_negation",
    110,
    Boolean,
    &[NodeKind::Not],
    |expr: &Expr, _context: &RuleContext| {
        if let ExprKind::Not(x) = expr.kind()
            && let Some(a) = negated(x)
            && a.is_logic()
        {
            return Some(a.clone());
        }
        None
    }
);

rule!(
    AbsorbingLiteralRule,
    "absorbing_literal",
    110,
    Boolean,
    &[NodeKind::And, NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        // a ∨ true = true, a ∧ false = false
        let (a, b, absorbing) = match expr.kind() {
            ExprKind::Or(a, b) => (a, b, true),
            ExprKind::And(a, b) => (a, b, false),
            _ => return None,
        };
        if (a.as_bool() == Some(absorbing) || b.as_bool() == Some(absorbing)) && is_logic(&[a, b]) {
            return Some(Expr::boolean(absorbing));
        }
        None
    }
);

rule!(
    FactorCommonOperandRule,
    "factor_common_operand",
    110,
    Boolean,
    &[NodeKind::And, NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        // (a ∧ b) ∨ (a ∧ c) = a ∧ (b ∨ c), and the dual
        let (outer_is_or, x, y) = match expr.kind() {
            ExprKind::Or(x, y) => (true, x, y),
            ExprKind::And(x, y) => (false, x, y),
            _ => return None,
        };
        let inner = |e: &Expr| -> Option<(Expr, Expr)> {
            match (outer_is_or, e.kind()) {
                (true, ExprKind::And(p, q)) | (false, ExprKind::Or(p, q)) => {
                    Some((p.clone(), q.clone()))
                }
                _ => None,
            }
        };
        let (p, q) = inner(x)?;
        let (r, s) = inner(y)?;
        let (common, left, right) = if p == r {
            (p, q, s)
        } else if p == s {
            (p, q, r)
        } else if q == r {
            (q, p, s)
        } else if q == s {
            (q, p, r)
        } else {
            return None;
        };
        if !is_logic(&[&common, &left, &right]) {
            return None;
        }
        Some(if outer_is_or {
            Expr::and(common, Expr::or(left, right))
        } else {
            Expr::or(common, Expr::and(left, right))
        })
    }
);

rule!(
    AbsorptionRule,
    "absorption",
    110,
    Boolean,
    &[NodeKind::And, NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        // a ∨ (a ∧ b) = a, a ∧ (a ∨ b) = a
        let (outer_is_or, x, y) = match expr.kind() {
            ExprKind::Or(x, y) => (true, x, y),
            ExprKind::And(x, y) => (false, x, y),
            _ => return None,
        };
        let absorbs = |a: &Expr, other: &Expr| match (outer_is_or, other.kind()) {
            (true, ExprKind::And(p, q)) | (false, ExprKind::Or(p, q)) => p == a || q == a,
            _ => false,
        };
        if absorbs(x, y) && x.is_logic() {
            return Some(x.clone());
        }
        if absorbs(y, x) && y.is_logic() {
            return Some(y.clone());
        }
        None
    }
);

rule!(
    ComplementAbsorptionRule,
    "complement_absorption",
    110,
    Boolean,
    &[NodeKind::And, NodeKind::Or],
    |expr: &Expr, _context: &RuleContext| {
        // a ∨ (¬a ∧ b) = a ∨ b, a ∧ (¬a ∨ b) = a ∧ b
        let (outer_is_or, x, y) = match expr.kind() {
            ExprKind::Or(x, y) => (true, x, y),
            ExprKind::And(x, y) => (false, x, y),
            _ => return None,
        };
        let remainder = |a: &Expr, other: &Expr| -> Option<Expr> {
            let (p, q) = match (outer_is_or, other.kind()) {
                (true, ExprKind::And(p, q)) | (false, ExprKind::Or(p, q)) => (p, q),
                _ => return None,
            };
            if is_negation_of(p, a) {
                Some(q.clone())
            } else if is_negation_of(q, a) {
                Some(p.clone())
            } else {
                None
            }
        };
        let (a, b) = if let Some(b) = remainder(x, y) {
            (x.clone(), b)
        } else {
            (y.clone(), remainder(y, x)?)
        };
        if !is_logic(&[&a, &b]) {
            return None;
        }
        Some(if outer_is_or {
            Expr::or(a, b)
        } else {
            Expr::and(a, b)
        })
    }
);

rule!(
    ContrapositionRule,
    "contraposition",
    110,
    Boolean,
    &[NodeKind::Implies],
    |expr: &Expr, _context: &RuleContext| {
        // ¬a → ¬b = b → a
        if let ExprKind::Implies(x, y) = expr.kind()
            && let (Some(a), Some(b)) = (negated(x), negated(y))
            && is_logic(&[a, b])
        {
            return Some(Expr::implies(b.clone(), a.clone()));
        }
        None
    }
);
