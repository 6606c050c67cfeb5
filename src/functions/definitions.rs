//! Built-in function definitions for the function registry
//!
//! Derivative formulas follow standard calculus (DLMF §4.21-4.28 for the
//! trigonometric family). Each formula only builds the tree; reducing it is
//! left to the simplifier.

use super::registry::FunctionDefinition;
use super::{chain, neg, one_and_square};
use crate::Expr;

/// Return all function definitions for populating the registry
pub(crate) fn all_definitions() -> Vec<FunctionDefinition> {
    vec![
        // Trigonometric
        FunctionDefinition {
            name: "sin",
            latex: r"\sin",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx sin(u) = cos(u) * u'
                chain(Expr::cos(args[0].clone()), &arg_primes[0])
            }),
        },
        FunctionDefinition {
            name: "cos",
            latex: r"\cos",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx cos(u) = -sin(u) * u'
                chain(neg(Expr::sin(args[0].clone())), &arg_primes[0])
            }),
        },
        FunctionDefinition {
            name: "tan",
            latex: r"\tan",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx tan(u) = u' / cos^2(u)
                Expr::div(
                    arg_primes[0].clone(),
                    Expr::pow(Expr::cos(args[0].clone()), Expr::integer(2)),
                )
            }),
        },
        FunctionDefinition {
            name: "cotan",
            latex: r"\cot",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx cot(u) = -u' / sin^2(u)
                Expr::div(
                    neg(arg_primes[0].clone()),
                    Expr::pow(Expr::sin(args[0].clone()), Expr::integer(2)),
                )
            }),
        },
        FunctionDefinition {
            name: "sec",
            latex: r"\sec",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx sec(u) = sec(u)tan(u) * u'
                let u = &args[0];
                chain(
                    Expr::mul(Expr::sec(u.clone()), Expr::tan(u.clone())),
                    &arg_primes[0],
                )
            }),
        },
        FunctionDefinition {
            name: "cosec",
            latex: r"\csc",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx csc(u) = -csc(u)cot(u) * u'
                let u = &args[0];
                chain(
                    Expr::mul(neg(Expr::cosec(u.clone())), Expr::cotan(u.clone())),
                    &arg_primes[0],
                )
            }),
        },
        // Inverse trigonometric
        FunctionDefinition {
            name: "arcsin",
            latex: r"\arcsin",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx asin(u) = u' / sqrt(1 - u^2)
                Expr::div(
                    arg_primes[0].clone(),
                    Expr::sqrt(one_and_square(&args[0], false)),
                )
            }),
        },
        FunctionDefinition {
            name: "arccos",
            latex: r"\arccos",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx acos(u) = -u' / sqrt(1 - u^2)
                Expr::div(
                    neg(arg_primes[0].clone()),
                    Expr::sqrt(one_and_square(&args[0], false)),
                )
            }),
        },
        FunctionDefinition {
            name: "arctan",
            latex: r"\arctan",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx atan(u) = u' / (1 + u^2)
                Expr::div(arg_primes[0].clone(), one_and_square(&args[0], true))
            }),
        },
        FunctionDefinition {
            name: "arccotan",
            latex: r"\operatorname{arccot}",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx acot(u) = -u' / (1 + u^2)
                Expr::div(neg(arg_primes[0].clone()), one_and_square(&args[0], true))
            }),
        },
        // Logarithm with explicit base: log(b, x)
        FunctionDefinition {
            name: "log",
            latex: r"\log",
            arity: 2..=2,
            derivative: Some(|args, arg_primes| {
                let (base, x) = (&args[0], &args[1]);
                let (base_prime, x_prime) = (&arg_primes[0], &arg_primes[1]);
                let base_is_constant = base_prime.is_zero();
                if base_is_constant {
                    // d/dx log_b(u) = u' / (u ln b)
                    Expr::div(x_prime.clone(), Expr::mul(x.clone(), Expr::ln(base.clone())))
                } else {
                    // log_b(u) = ln u / ln b, quotient rule
                    let ln_b = Expr::ln(base.clone());
                    let ln_x = Expr::ln(x.clone());
                    Expr::div(
                        Expr::minus(
                            Expr::mul(Expr::div(x_prime.clone(), x.clone()), ln_b.clone()),
                            Expr::mul(ln_x, Expr::div(base_prime.clone(), base.clone())),
                        ),
                        Expr::pow(ln_b, Expr::integer(2)),
                    )
                }
            }),
        },
        // Absolute value and sign
        FunctionDefinition {
            name: "abs",
            latex: r"\operatorname{abs}",
            arity: 1..=1,
            derivative: Some(|args, arg_primes| {
                // d/dx |u| = sgn(u) * u'
                chain(Expr::signum(args[0].clone()), &arg_primes[0])
            }),
        },
        FunctionDefinition {
            name: "signum",
            latex: r"\operatorname{sgn}",
            arity: 1..=1,
            // Opaque: its derivative is a distribution
            derivative: None,
        },
    ]
}
