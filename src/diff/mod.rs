//! Symbolic differentiation.
//!
//! `differentiate` builds the raw derivative tree; call `simplify` on the
//! result to reduce it:
//!
//! ```
//! use symb_kernel::Expr;
//!
//! let x = Expr::var("x");
//! let d = Expr::sin(x.clone()).differentiate(&x).simplify();
//! assert_eq!(d, Expr::cos(x));
//! ```
//!
//! Nodes without a closed-form derivative (user-named functions, `signum`,
//! statements, existing `Derivative` nodes) differentiate to an unevaluated
//! `Derivative` node instead of failing.

mod engine;

pub(crate) use engine::Differentiator;

use crate::{Expr, ExprKind};

impl Expr {
    /// First derivative with respect to `var`.
    ///
    /// `var` is expected to be a variable; for any other expression the
    /// result is the unevaluated `Derivative(self, var)`.
    pub fn differentiate(&self, var: &Expr) -> Expr {
        if !matches!(var.kind(), ExprKind::Variable(_)) {
            return Expr::derivative(self.clone(), var.clone(), 1);
        }
        Differentiator::new(var).derive(self)
    }

    /// `n`-th derivative with respect to `var`; `n = 0` returns `self`
    pub fn differentiate_n(&self, var: &Expr, n: u32) -> Expr {
        (0..n).fold(self.clone(), |acc, _| acc.differentiate(var))
    }
}
