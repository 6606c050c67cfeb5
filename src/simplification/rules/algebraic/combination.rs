use crate::simplification::helpers::{
    base_and_exponent, flatten_mul, flatten_terms, power, rebuild_mul, scale, split_term,
};
use crate::simplification::rules::NodeKind;
use crate::{Expr, ExprKind, Number, expr_cmp};

rule!(
    CollectLikeTermsRule,
    "collect_like_terms",
    50,
    Algebraic,
    &[NodeKind::Sum, NodeKind::Minus],
    |expr: &Expr, context: &RuleContext| {
        let settings = context.settings.as_ref();

        // Non-constant parts in order of first appearance
        let mut groups: Vec<(Expr, Number)> = Vec::new();
        let mut constant = Number::integer(0);
        for (term, positive) in flatten_terms(expr) {
            let (mut coefficient, rest) = split_term(&term, settings);
            if !positive {
                coefficient = coefficient.neg();
            }
            match rest {
                None => constant = constant.add_with(&coefficient, settings),
                Some(rest) => match groups.iter_mut().find(|(r, _)| *r == rest) {
                    Some((_, c)) => *c = c.add_with(&coefficient, settings),
                    None => groups.push((rest, coefficient)),
                },
            }
        }

        if groups.iter().any(|(rest, _)| !rest.is_finite()) {
            return None;
        }

        let mut result: Option<Expr> = None;
        for (rest, coefficient) in groups {
            if coefficient.is_zero() {
                continue;
            }
            result = Some(match result {
                None => scale(coefficient, rest),
                Some(acc) if coefficient.is_negative() => {
                    Expr::minus(acc, scale(coefficient.neg(), rest))
                }
                Some(acc) => Expr::sum(acc, scale(coefficient, rest)),
            });
        }
        let result = match result {
            None => Expr::number(constant),
            Some(acc) if constant.is_zero() => acc,
            Some(acc) if constant.is_negative() => {
                Expr::minus(acc, Expr::number(constant.neg()))
            }
            Some(acc) => Expr::sum(acc, Expr::number(constant)),
        };
        (result != *expr).then_some(result)
    }
);

rule!(
    CollectLikeFactorsRule,
    "collect_like_factors",
    50,
    Algebraic,
    &[NodeKind::Mul],
    |expr: &Expr, context: &RuleContext| {
        let settings = context.settings.as_ref();

        // Factors of a quotient inside the product: the denominator's ones
        // count with negated exponents
        let mut factors: Vec<(Expr, bool)> = Vec::new();
        for factor in flatten_mul(expr) {
            match factor.kind() {
                ExprKind::Div(num, den) => {
                    factors.extend(flatten_mul(num).into_iter().map(|f| (f, false)));
                    factors.extend(flatten_mul(den).into_iter().map(|f| (f, true)));
                }
                _ => factors.push((factor, false)),
            }
        }

        let mut coefficient = Number::integer(1);
        // Bases in order of first appearance with their summed exponents
        let mut groups: Vec<(Expr, Expr)> = Vec::new();
        for (factor, inverted) in factors {
            if let Some(n) = factor.as_number() {
                coefficient = if inverted {
                    coefficient.div_with(n, settings)
                } else {
                    coefficient.mul_with(n, settings)
                };
                continue;
            }
            let (base, mut exponent) = base_and_exponent(&factor);
            if inverted {
                exponent = match exponent.as_number() {
                    Some(e) => Expr::number(e.neg()),
                    None => Expr::neg(exponent),
                };
            }
            match groups.iter_mut().find(|(b, _)| *b == base) {
                Some((_, acc)) => {
                    let summed = match (acc.as_number(), exponent.as_number()) {
                        (Some(a), Some(e)) => Expr::number(a.add_with(e, settings)),
                        _ => Expr::sum(acc.clone(), exponent),
                    };
                    // x * x^-1 is undefined at x = 0
                    if context.domain_safe && summed.is_zero() {
                        return None;
                    }
                    *acc = summed;
                }
                None => groups.push((base, exponent)),
            }
        }

        if !coefficient.is_finite() || groups.iter().any(|(b, _)| !b.is_finite()) {
            return None;
        }
        if coefficient.is_zero() {
            return Some(Expr::integer(0));
        }

        let mut numerator = Vec::new();
        let mut denominator = Vec::new();
        for (base, exponent) in groups {
            match exponent.as_number() {
                Some(e) if e.is_zero() => {}
                Some(e) if e.is_negative() => {
                    denominator.push(power(base, Expr::number(e.neg())));
                }
                _ => numerator.push(power(base, exponent)),
            }
        }
        numerator.sort_by(expr_cmp);
        denominator.sort_by(expr_cmp);

        // Coefficient leads the left-folded product
        if !coefficient.is_one() || numerator.is_empty() {
            numerator.insert(0, Expr::number(coefficient));
        }
        let top = rebuild_mul(numerator);
        let result = if denominator.is_empty() {
            top
        } else {
            Expr::div(top, rebuild_mul(denominator))
        };
        (result != *expr).then_some(result)
    }
);
