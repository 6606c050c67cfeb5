use crate::simplification::rules::{NodeKind, Rule};
use crate::{Expr, ExprKind, Func};
use std::sync::Arc;

/// `log(b, x)` -> `(b, x)`
fn log_args(expr: &Expr) -> Option<(&Expr, &Expr)> {
    match expr.kind() {
        ExprKind::Function {
            func: Func::Log,
            args,
        } if args.len() == 2 => Some((&args[0], &args[1])),
        _ => None,
    }
}

/// A base the logarithm is defined for, as far as a literal can tell
fn is_valid_base(base: &Expr) -> bool {
    match base.as_number() {
        Some(n) => !n.is_one() && n.compare(&crate::Number::integer(0)).is_some_and(|o| o.is_gt()),
        None => base.is_finite(),
    }
}

rule!(
    LogSelfRule,
    "log_self",
    95,
    Exponential,
    &[NodeKind::Function],
    |expr: &Expr, _context: &RuleContext| {
        // log(b, b) = 1
        let (base, x) = log_args(expr)?;
        (base == x && is_valid_base(base)).then(|| Expr::integer(1))
    }
);

rule!(
    LogOneRule,
    "log_one",
    95,
    Exponential,
    &[NodeKind::Function],
    |expr: &Expr, _context: &RuleContext| {
        // log(b, 1) = 0
        let (base, x) = log_args(expr)?;
        (x.is_one() && is_valid_base(base)).then(|| Expr::integer(0))
    }
);

rule!(
    LogOfPowerRule,
    "log_of_power",
    90,
    Exponential,
    &[NodeKind::Function],
    alters_domain: true,
    |expr: &Expr, _context: &RuleContext| {
        // log(b, b^x) = x
        let (base, x) = log_args(expr)?;
        if let ExprKind::Pow(b, exponent) = x.kind()
            && b == base
            && is_valid_base(base)
        {
            return Some(exponent.clone());
        }
        None
    }
);

rule!(
    PowerOfLogRule,
    "power_of_log",
    90,
    Exponential,
    &[NodeKind::Pow],
    alters_domain: true,
    |expr: &Expr, _context: &RuleContext| {
        // b^log(b, x) = x
        if let ExprKind::Pow(b, exponent) = expr.kind()
            && let Some((base, x)) = log_args(exponent)
            && b == base
            && is_valid_base(base)
        {
            return Some(x.clone());
        }
        None
    }
);

/// Get all exponential rules in priority order
pub(crate) fn get_exponential_rules() -> Vec<Arc<dyn Rule + Send + Sync>> {
    vec![
        Arc::new(LogSelfRule),
        Arc::new(LogOneRule),
        Arc::new(LogOfPowerRule),
        Arc::new(PowerOfLogRule),
    ]
}
