//! Structural differentiation.
//!
//! Produces the combinator tree of the sum, product, quotient, power and
//! chain rules without reducing it. Shared subtrees are differentiated once
//! per call.

use rustc_hash::FxHashMap;

use crate::functions::registry::Registry;
use crate::{Expr, ExprKind};

pub(crate) struct Differentiator<'a> {
    var: &'a Expr,
    /// Derivatives of already visited instances, keyed by node id
    memo: FxHashMap<u64, Expr>,
}

impl<'a> Differentiator<'a> {
    pub(crate) fn new(var: &'a Expr) -> Self {
        Self {
            var,
            memo: FxHashMap::default(),
        }
    }

    /// Unevaluated first derivative of `expr`
    fn opaque(&self, expr: &Expr) -> Expr {
        Expr::derivative(expr.clone(), self.var.clone(), 1)
    }

    pub(crate) fn derive(&mut self, expr: &Expr) -> Expr {
        if let Some(done) = self.memo.get(&expr.id()) {
            return done.clone();
        }
        let result = self.derive_uncached(expr);
        self.memo.insert(expr.id(), result.clone());
        result
    }

    fn derive_uncached(&mut self, expr: &Expr) -> Expr {
        // Derivative nodes never collapse, whatever they depend on
        if matches!(expr.kind(), ExprKind::Derivative { .. }) {
            return self.opaque(expr);
        }
        if !expr.is_finite() {
            return Expr::nan();
        }
        if !expr.contains_node(self.var) {
            return Expr::integer(0);
        }

        match expr.kind() {
            ExprKind::Number(_) | ExprKind::Boolean(_) => Expr::integer(0),

            ExprKind::Variable(_) => {
                if expr == self.var {
                    Expr::integer(1)
                } else {
                    Expr::integer(0)
                }
            }

            // Sum rule: (u + v)' = u' + v'
            ExprKind::Sum(u, v) => Expr::sum(self.derive(u), self.derive(v)),

            // Subtraction rule: (u - v)' = u' - v'
            ExprKind::Minus(u, v) => Expr::minus(self.derive(u), self.derive(v)),

            // Product rule: (u * v)' = u' * v + u * v'
            ExprKind::Mul(u, v) => {
                let u_prime = self.derive(u);
                let v_prime = self.derive(v);
                Expr::sum(
                    Expr::mul(u_prime, v.clone()),
                    Expr::mul(u.clone(), v_prime),
                )
            }

            // Quotient rule: (u / v)' = (u' * v - u * v') / v^2
            ExprKind::Div(u, v) => {
                let u_prime = self.derive(u);
                let v_prime = self.derive(v);
                Expr::div(
                    Expr::minus(
                        Expr::mul(u_prime, v.clone()),
                        Expr::mul(u.clone(), v_prime),
                    ),
                    Expr::pow(v.clone(), Expr::integer(2)),
                )
            }

            ExprKind::Pow(u, v) => self.derive_pow(u, v),

            ExprKind::Function { func, args } => match Registry::for_func(func) {
                Some(def) if def.validate_arity(args.len()) => match def.derivative {
                    Some(formula) => {
                        let arg_primes: Vec<Expr> = args.iter().map(|a| self.derive(a)).collect();
                        formula(args, &arg_primes)
                    }
                    None => self.opaque(expr),
                },
                // Opaque, user-named or called with the wrong arity
                _ => self.opaque(expr),
            },

            // Statements depending on the variable have no closed form
            _ => self.opaque(expr),
        }
    }

    fn derive_pow(&mut self, u: &Expr, v: &Expr) -> Expr {
        let base_varies = u.contains_node(self.var);
        let exponent_varies = v.contains_node(self.var);

        match (base_varies, exponent_varies) {
            // (u^n)' = n * u^(n-1) * u'
            (true, false) => {
                let u_prime = self.derive(u);
                Expr::mul(
                    Expr::mul(
                        v.clone(),
                        Expr::pow(u.clone(), Expr::minus(v.clone(), Expr::integer(1))),
                    ),
                    u_prime,
                )
            }
            // (a^v)' = a^v * ln(a) * v'
            (false, true) => {
                let v_prime = self.derive(v);
                Expr::mul(
                    Expr::mul(Expr::pow(u.clone(), v.clone()), Expr::ln(u.clone())),
                    v_prime,
                )
            }
            // Logarithmic differentiation: (u^v)' = u^v * (v' * ln(u) + v * u' / u)
            _ => {
                let u_prime = self.derive(u);
                let v_prime = self.derive(v);
                Expr::mul(
                    Expr::pow(u.clone(), v.clone()),
                    Expr::sum(
                        Expr::mul(v_prime, Expr::ln(u.clone())),
                        Expr::mul(v.clone(), Expr::div(u_prime, u.clone())),
                    ),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves() {
        let x = Expr::var("x");
        let mut d = Differentiator::new(&x);
        assert_eq!(d.derive(&x), Expr::integer(1));
        assert_eq!(d.derive(&Expr::var("y")), Expr::integer(0));
        assert_eq!(d.derive(&Expr::rational(1, 2)), Expr::integer(0));
        assert!(d.derive(&Expr::nan()).is_nan());
    }

    #[test]
    fn test_product_rule_shape() {
        let x = Expr::var("x");
        let e = Expr::mul(x.clone(), Expr::sin(x.clone()));
        let out = Differentiator::new(&x).derive(&e);
        let expected = Expr::sum(
            Expr::mul(Expr::integer(1), Expr::sin(x.clone())),
            Expr::mul(x.clone(), Expr::mul(Expr::cos(x.clone()), Expr::integer(1))),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_constant_exponent_power_shape() {
        let x = Expr::var("x");
        let e = Expr::pow(x.clone(), Expr::integer(3));
        let out = Differentiator::new(&x).derive(&e);
        let expected = Expr::mul(
            Expr::mul(
                Expr::integer(3),
                Expr::pow(x.clone(), Expr::minus(Expr::integer(3), Expr::integer(1))),
            ),
            Expr::integer(1),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_shared_subtrees_are_memoized() {
        let x = Expr::var("x");
        let inner = Expr::sin(x.clone());
        let e = Expr::sum(inner.clone(), inner.clone());
        let mut d = Differentiator::new(&x);
        let out = d.derive(&e);
        match out.kind() {
            ExprKind::Sum(a, b) => assert!(a.ptr_eq(b)),
            other => unreachable!("expected a sum, got {:?}", other),
        }
    }
}
