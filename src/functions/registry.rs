use crate::Expr;
use crate::core::expr::Func;
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// Symbolic derivative formula.
/// Arguments: (args of the call, derivatives of the args); returns the total
/// derivative `sum((dF/d arg_i) * (d arg_i / dx))`.
pub(crate) type DerivativeFn = fn(&[Expr], &[Expr]) -> Expr;

/// Definition of a built-in function
#[derive(Clone)]
pub(crate) struct FunctionDefinition {
    /// Canonical name (e.g., "sin", "arccotan")
    pub name: &'static str,

    /// LaTeX command used by the renderer
    pub latex: &'static str,

    /// Acceptable argument count
    pub arity: RangeInclusive<usize>,

    /// `None` for functions that stay opaque under differentiation
    pub derivative: Option<DerivativeFn>,
}

impl FunctionDefinition {
    pub(crate) fn validate_arity(&self, args: usize) -> bool {
        self.arity.contains(&args)
    }
}

static REGISTRY: OnceLock<FxHashMap<&'static str, FunctionDefinition>> = OnceLock::new();

fn init_registry() -> FxHashMap<&'static str, FunctionDefinition> {
    crate::functions::definitions::all_definitions()
        .into_iter()
        .map(|def| (def.name, def))
        .collect()
}

/// Central registry for getting function definitions
pub(crate) struct Registry;

impl Registry {
    /// Definition by canonical name
    pub(crate) fn get(name: &str) -> Option<&'static FunctionDefinition> {
        REGISTRY.get_or_init(init_registry).get(name)
    }

    /// Definition of a built-in function, `None` for user-named ones
    pub(crate) fn for_func(func: &Func) -> Option<&'static FunctionDefinition> {
        match func {
            Func::Custom(_) => None,
            builtin => Self::get(builtin.name()),
        }
    }
}
