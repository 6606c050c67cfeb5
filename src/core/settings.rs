//! Numeric and scoring configuration.
//!
//! A single process-wide [`Settings`] value is read by the convenience entry
//! points (`Expr::simplify`, `Number::add`, ...). Every operation that depends
//! on configuration also has a `*_with` variant taking an explicit
//! `&Settings`, so callers that need isolation never touch the global.

use super::expr::{Expr, ExprKind};
use super::number::{Decimal, Number};
use num_bigint::BigInt;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Scoring function used to pick among rewrite candidates (lower is simpler)
pub type SimplicityFn = Arc<dyn Fn(&Expr) -> i64 + Send + Sync>;

/// Id of the built-in scoring function
const DEFAULT_SCORER_ID: u64 = 0;
static NEXT_SCORER_ID: AtomicU64 = AtomicU64::new(1);

/// Generation of settings installed with `set_global`; 0 is never installed
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

static GLOBAL_SETTINGS: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::default())));

/// Kernel configuration
#[derive(Clone)]
pub struct Settings {
    downcasting: bool,
    zero_epsilon: Decimal,
    max_numerator_denominator: BigInt,
    decimal_precision: u32,
    simplicity: SimplicityFn,
    scorer_id: u64,
    generation: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            downcasting: true,
            // 1e-15
            zero_epsilon: Decimal::new(BigInt::from(1), -15),
            max_numerator_denominator: BigInt::from(100_000_000u64),
            decimal_precision: 100,
            simplicity: Arc::new(default_simplicity),
            scorer_id: DEFAULT_SCORER_ID,
            generation: 0,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("downcasting", &self.downcasting)
            .field("zero_epsilon", &self.zero_epsilon)
            .field("max_numerator_denominator", &self.max_numerator_denominator)
            .field("decimal_precision", &self.decimal_precision)
            .field("scorer_id", &self.scorer_id)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process-wide settings
    pub fn current() -> Arc<Settings> {
        GLOBAL_SETTINGS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the process-wide settings.
    /// Operations already running keep the snapshot they started with;
    /// results memoized under earlier settings are no longer served.
    pub fn set_global(mut settings: Settings) {
        settings.generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        let mut guard = GLOBAL_SETTINGS
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(settings);
    }

    /// Enable or disable automatic downcasting of numeric results
    pub fn with_downcasting(mut self, enabled: bool) -> Self {
        self.downcasting = enabled;
        self
    }

    /// Distance from an integer/rational below which a real is treated as exact
    pub fn with_zero_epsilon(mut self, epsilon: Decimal) -> Self {
        self.zero_epsilon = epsilon.abs();
        self
    }

    /// Largest numerator or denominator a real may be downcast into
    pub fn with_max_numerator_denominator(mut self, max: BigInt) -> Self {
        self.max_numerator_denominator = max;
        self
    }

    /// Significant digits kept when a real division does not terminate
    pub fn with_decimal_precision(mut self, digits: u32) -> Self {
        self.decimal_precision = digits.max(1);
        self
    }

    /// Install a custom scoring function
    pub fn with_simplicity<F>(mut self, scorer: F) -> Self
    where
        F: Fn(&Expr) -> i64 + Send + Sync + 'static,
    {
        self.simplicity = Arc::new(scorer);
        self.scorer_id = NEXT_SCORER_ID.fetch_add(1, Ordering::Relaxed);
        self
    }

    pub fn downcasting(&self) -> bool {
        self.downcasting
    }

    pub fn zero_epsilon(&self) -> &Decimal {
        &self.zero_epsilon
    }

    pub fn max_numerator_denominator(&self) -> &BigInt {
        &self.max_numerator_denominator
    }

    pub fn decimal_precision(&self) -> u32 {
        self.decimal_precision
    }

    pub(crate) fn simplicity_fn(&self) -> &SimplicityFn {
        &self.simplicity
    }

    /// Identifies the scoring function, used to key cached scores
    pub(crate) fn scorer_id(&self) -> u64 {
        self.scorer_id
    }

    /// Identifies an installed global configuration, used to key memoized
    /// `eval` results
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

/// Built-in score: a weighted node count.
/// Divisions, general powers and function calls weigh more than sums and
/// leaves, so rewrites that remove them are preferred. A power with an
/// integer exponent weighs like a product, so `x * x` and `x^2` tie.
pub fn default_simplicity(expr: &Expr) -> i64 {
    expr.nodes().map(node_weight).sum()
}

fn node_weight(node: &Expr) -> i64 {
    match node.kind() {
        ExprKind::Number(n) => {
            let base = match n {
                Number::Integer(_) => 1,
                Number::Rational(_) => 2,
                Number::Real(_) => 3,
                Number::Complex(_) => 4,
            };
            if n.is_negative() { base + 1 } else { base }
        }
        ExprKind::Variable(_) | ExprKind::Boolean(_) => 1,
        ExprKind::Sum(..) | ExprKind::Minus(..) | ExprKind::Mul(..) => 2,
        ExprKind::Pow(_, exponent) if exponent.as_number().is_some_and(Number::is_integer) => 2,
        ExprKind::Div(..) | ExprKind::Pow(..) => 3,
        ExprKind::Function { .. } => 4,
        ExprKind::Derivative { .. } => 6,
        ExprKind::Not(_) => 1,
        ExprKind::And(..) | ExprKind::Or(..) => 2,
        ExprKind::Xor(..) | ExprKind::Implies(..) => 3,
        ExprKind::Equals(..)
        | ExprKind::Greater(..)
        | ExprKind::GreaterOrEqual(..)
        | ExprKind::Less(..)
        | ExprKind::LessOrEqual(..)
        | ExprKind::In(..) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.downcasting());
        assert_eq!(s.decimal_precision(), 100);
        assert_eq!(s.zero_epsilon().to_string(), "0.000000000000001");
        assert_eq!(s.scorer_id(), DEFAULT_SCORER_ID);
    }

    #[test]
    fn test_custom_scorer_gets_fresh_id() {
        let a = Settings::default().with_simplicity(|_| 0);
        let b = Settings::default().with_simplicity(|_| 1);
        assert_ne!(a.scorer_id(), DEFAULT_SCORER_ID);
        assert_ne!(a.scorer_id(), b.scorer_id());
    }

    #[test]
    fn test_default_simplicity_prefers_smaller_trees() {
        let x = Expr::var("x");
        let big = Expr::sum(x.clone(), Expr::integer(0));
        assert!(default_simplicity(&x) < default_simplicity(&big));
        assert!(
            default_simplicity(&Expr::integer(2)) < default_simplicity(&Expr::integer(-2))
        );
    }

    #[test]
    fn test_collected_power_ties_with_product() {
        let x = Expr::var("x");
        let product = Expr::mul(x.clone(), x.clone());
        let square = Expr::pow(x.clone(), Expr::integer(2));
        assert_eq!(default_simplicity(&square), default_simplicity(&product));
        let root = Expr::pow(x, Expr::rational(1, 2));
        assert!(default_simplicity(&square) < default_simplicity(&root));
    }
}
