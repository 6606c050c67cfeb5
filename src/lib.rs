//! Symbolic Expression Kernel
//!
//! Immutable expression trees over an exact numeric tower, a priority-driven
//! rewrite engine and symbolic differentiation.
//!
//! # Features
//! - Numeric tower `Integer ⊆ Rational ⊆ Real ⊆ Complex` with automatic
//!   downcasting to the narrowest exact representation
//! - Structural equality and hashing, memoized node properties
//! - Rule-based simplification with fixpoint iteration and a pluggable
//!   simplicity score
//! - Boolean and relational statements with their own rewrite rules
//! - Symbolic differentiation with an unevaluated `Derivative` fallback
//!
//! # Usage
//!
//! ```
//! use symb_kernel::Expr;
//!
//! let x = Expr::var("x");
//! // x^2 + 2x + 1
//! let f = Expr::pow(x.clone(), Expr::integer(2))
//!     + Expr::mul(Expr::integer(2), x.clone())
//!     + Expr::integer(1);
//!
//! let df = f.differentiate(&x).simplify();
//! assert_eq!(df.to_string(), "2 * x + 2");
//! ```
//!
//! Every entry point that depends on configuration has a `*_with` variant
//! taking an explicit [`Settings`]; the plain variants read the process-wide
//! value from [`Settings::current`].

mod core;
mod diff;
mod functions;
mod simplification;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use crate::core::{
    Complex, DEFAULT_CACHE_CAPACITY, Decimal, Expr, ExprKind, Func, MAX_PARSED_EXPONENT, Nodes,
    Number, Priority, Real, Settings, SimplicityFn, SymbError, Symbol, clear_property_cache,
    default_simplicity, expr_cmp,
};
pub use simplification::{DEFAULT_MAX_ITERATIONS, Simplifier};
