//! Simplification framework - reduces expressions
//!
//! Two entry points consume the rule set:
//! - `Expr::eval` folds literal operands only (numeric arithmetic, boolean
//!   connectives, comparisons of real numbers) in a single bottom-up pass.
//! - `Expr::simplify` applies every rule, repeating passes until nothing
//!   changes, a cycle shows up or the pass ceiling is reached, and returns
//!   the candidate with the lowest simplicity score.
//!
//! ```
//! use symb_kernel::Expr;
//!
//! let a = Expr::var("a");
//! let b = Expr::var("b");
//! let e = Expr::not(Expr::and(Expr::not(a.clone()), Expr::not(b.clone())));
//! assert_eq!(e.simplify(), Expr::or(a, b));
//! ```

pub(crate) mod engine;
pub(crate) mod helpers;
#[macro_use]
mod rules;

pub use engine::{DEFAULT_MAX_ITERATIONS, Simplifier};

use crate::Expr;
use crate::core::cache::{CachedProps, property_cache};
use crate::core::settings::Settings;

impl Expr {
    /// Simplify with the process-wide settings and the default pass ceiling
    pub fn simplify(&self) -> Expr {
        Simplifier::new().simplify(self)
    }

    /// Simplify with at most `depth` rewriting passes
    pub fn simplify_depth(&self, depth: usize) -> Expr {
        Simplifier::new().with_max_iterations(depth).simplify(self)
    }

    /// Simplify with explicit settings
    pub fn simplify_with(&self, settings: &Settings) -> Expr {
        Simplifier::new()
            .with_settings(settings.clone())
            .simplify(self)
    }

    /// Fold literal operands under the process-wide settings.
    /// The result is memoized per instance and per installed settings.
    pub fn eval(&self) -> Expr {
        let settings = Settings::current();
        let generation = settings.generation();
        property_cache().get_or_compute(
            self.id(),
            |p| memoized_eval(p, generation),
            |p, v| p.evaluated = Some((generation, v)),
            || Simplifier::evaluator(settings).fold(self),
        )
    }

    /// Fold literal operands under explicit settings (not memoized)
    pub fn eval_with(&self, settings: &Settings) -> Expr {
        Simplifier::evaluator(std::sync::Arc::new(settings.clone())).fold(self)
    }
}

fn memoized_eval(props: &CachedProps, generation: u64) -> Option<Expr> {
    match &props.evaluated {
        Some((g, value)) if *g == generation => Some(value.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::memoized_eval;
    use crate::core::cache::property_cache;
    use crate::{Expr, Settings};

    #[test]
    fn test_eval_folds_only_literals() {
        let x = Expr::var("x");
        let e = Expr::sum(Expr::mul(Expr::integer(2), Expr::integer(3)), Expr::sum(x.clone(), Expr::integer(0)));
        // 2*3 folds, x + 0 is an algebraic identity and stays
        assert_eq!(
            e.eval(),
            Expr::sum(Expr::integer(6), Expr::sum(x, Expr::integer(0)))
        );
    }

    #[test]
    fn test_eval_is_idempotent() {
        let e = Expr::and(Expr::boolean(true), Expr::less(Expr::integer(1), Expr::integer(2)));
        let once = e.eval();
        assert_eq!(once, Expr::boolean(true));
        assert_eq!(e.eval(), once);
        assert_eq!(once.eval(), once);
    }

    #[test]
    fn test_eval_memo_is_dropped_when_global_settings_change() {
        let e = Expr::sum(Expr::integer(1), Expr::integer(2));
        assert_eq!(e.eval(), Expr::integer(3));

        // Same configuration, freshly installed
        Settings::set_global(Settings::default());
        let generation = Settings::current().generation();
        let stale = property_cache().get(e.id(), |p| memoized_eval(p, generation));
        assert!(stale.is_none());
        assert_eq!(e.eval(), Expr::integer(3));
    }

    #[test]
    fn test_simplify_depth_zero_is_identity() {
        let e = Expr::sum(Expr::integer(1), Expr::integer(1));
        assert!(e.simplify_depth(0).ptr_eq(&e));
        assert_eq!(e.simplify_depth(1), Expr::integer(2));
    }
}
