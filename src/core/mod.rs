//! Core types for symbolic mathematics
//!
//! This module contains the fundamental types:
//! - `Expr` / `ExprKind` - immutable expression trees
//! - `Number` - the Integer ⊆ Rational ⊆ Real ⊆ Complex tower
//! - `Symbol` - interned variable names
//! - `Settings` - numeric and scoring configuration
//! - `SymbError` - error types
//! - the derived-property cache and display formatting

pub(crate) mod cache;
mod display;
pub(crate) mod error;
pub(crate) mod expr;
pub(crate) mod number;
pub(crate) mod settings;
pub(crate) mod symbol;

// Public re-exports (for external API)
pub use cache::{DEFAULT_CACHE_CAPACITY, clear_property_cache};
pub use error::SymbError;
pub use expr::{Expr, ExprKind, Func, Nodes, Priority, expr_cmp};
pub use number::{Complex, Decimal, MAX_PARSED_EXPONENT, Number, Real};
pub use settings::{Settings, SimplicityFn, default_simplicity};
pub use symbol::Symbol;
