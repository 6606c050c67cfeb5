use crate::core::settings::Settings;
use crate::{Expr, ExprKind};
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock};

/// Define a unit struct implementing [`Rule`].
///
/// `rule!(Name, "name", priority, Category, &[NodeKind::..], |expr: &Expr, context: &RuleContext| { .. })`
/// with an optional `alters_domain: true` before the closure.
macro_rules! rule {
    ($name:ident, $rule_name:expr, $priority:expr, $category:ident, $kinds:expr, alters_domain: $alters:expr, |$expr:ident: &Expr, $context:ident: &RuleContext| $body:block) => {
        pub(crate) struct $name;

        impl $crate::simplification::rules::Rule for $name {
            fn name(&self) -> &'static str {
                $rule_name
            }

            fn priority(&self) -> i32 {
                $priority
            }

            fn category(&self) -> $crate::simplification::rules::RuleCategory {
                $crate::simplification::rules::RuleCategory::$category
            }

            fn alters_domain(&self) -> bool {
                $alters
            }

            fn applies_to(&self) -> &'static [$crate::simplification::rules::NodeKind] {
                $kinds
            }

            fn apply(
                &self,
                $expr: &$crate::Expr,
                $context: &$crate::simplification::rules::RuleContext,
            ) -> Option<$crate::Expr> {
                $body
            }
        }
    };
    ($name:ident, $rule_name:expr, $priority:expr, $category:ident, $kinds:expr, |$expr:ident: &Expr, $context:ident: &RuleContext| $body:block) => {
        rule!($name, $rule_name, $priority, $category, $kinds, alters_domain: false, |$expr: &Expr, $context: &RuleContext| $body);
    };
}

/// Node variant tag for fast rule filtering.
/// Rules declare which kinds they can apply to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
    Number,
    Variable,
    Boolean,
    Sum,
    Minus,
    Mul,
    Div,
    Pow,
    Function,
    Derivative,
    Not,
    And,
    Or,
    Xor,
    Implies,
    Equals,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    In,
}

impl NodeKind {
    /// Get the kind of an expression (cheap O(1) operation)
    #[inline]
    pub fn of(expr: &Expr) -> Self {
        match expr.kind() {
            ExprKind::Number(_) => NodeKind::Number,
            ExprKind::Variable(_) => NodeKind::Variable,
            ExprKind::Boolean(_) => NodeKind::Boolean,
            ExprKind::Sum(..) => NodeKind::Sum,
            ExprKind::Minus(..) => NodeKind::Minus,
            ExprKind::Mul(..) => NodeKind::Mul,
            ExprKind::Div(..) => NodeKind::Div,
            ExprKind::Pow(..) => NodeKind::Pow,
            ExprKind::Function { .. } => NodeKind::Function,
            ExprKind::Derivative { .. } => NodeKind::Derivative,
            ExprKind::Not(_) => NodeKind::Not,
            ExprKind::And(..) => NodeKind::And,
            ExprKind::Or(..) => NodeKind::Or,
            ExprKind::Xor(..) => NodeKind::Xor,
            ExprKind::Implies(..) => NodeKind::Implies,
            ExprKind::Equals(..) => NodeKind::Equals,
            ExprKind::Greater(..) => NodeKind::Greater,
            ExprKind::GreaterOrEqual(..) => NodeKind::GreaterOrEqual,
            ExprKind::Less(..) => NodeKind::Less,
            ExprKind::LessOrEqual(..) => NodeKind::LessOrEqual,
            ExprKind::In(..) => NodeKind::In,
        }
    }
}

/// Core trait for all simplification rules.
///
/// A rule is total: it returns `None` when its shape or guard does not
/// match, never an error.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn priority(&self) -> i32;
    fn category(&self) -> RuleCategory;

    /// Rewrites that are only valid on part of the domain (e.g. `x / x = 1`)
    fn alters_domain(&self) -> bool {
        false
    }

    /// Which node kinds this rule can apply to.
    /// Rules will ONLY be checked against nodes of these kinds.
    fn applies_to(&self) -> &'static [NodeKind];

    fn apply(&self, expr: &Expr, context: &RuleContext) -> Option<Expr>;
}

/// Categories of simplification rules
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleCategory {
    Numeric, // Constant folding
    Logic,   // Boolean and relational folding
    Boolean, // Connective identities
    Algebraic,
    Trigonometric,
    Exponential,
    Calculus,
}

impl RuleCategory {
    /// Categories run by `eval`: pure folding of literal operands
    pub fn is_eval(self) -> bool {
        matches!(self, RuleCategory::Numeric | RuleCategory::Logic)
    }
}

/// Priority ranges:
/// - 200: literal folding
/// - 80-120: identities and cancellations
/// - 60-79: calculus
/// - 1-59: collection of like terms and factors
///
/// Context passed to rules during application
#[derive(Clone, Debug)]
pub struct RuleContext {
    pub settings: Arc<Settings>,
    pub domain_safe: bool,
}

impl Default for RuleContext {
    fn default() -> Self {
        Self {
            settings: Settings::current(),
            domain_safe: false,
        }
    }
}

impl RuleContext {
    pub fn with_settings(mut self, settings: Arc<Settings>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_domain_safe(mut self, domain_safe: bool) -> Self {
        self.domain_safe = domain_safe;
        self
    }
}

/// Numeric constant folding
pub mod numeric;

/// Boolean folding and connective identities
pub mod logic;

/// Algebraic simplification rules
pub mod algebraic;

/// Trigonometric simplification rules
pub mod trigonometric;

/// Exponential and logarithmic simplification rules
pub mod exponential;

/// Derivative-node rules
pub mod calculus;

type SharedRule = Arc<dyn Rule + Send + Sync>;

/// Ordered rule set, indexed by node kind
pub struct RuleRegistry {
    pub(crate) rules: Vec<SharedRule>,
    /// Rules indexed by node kind for fast lookup
    rules_by_kind: FxHashMap<NodeKind, Vec<SharedRule>>,
    /// The eval subset, same order
    eval_by_kind: FxHashMap<NodeKind, Vec<SharedRule>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            rules_by_kind: FxHashMap::default(),
            eval_by_kind: FxHashMap::default(),
        }
    }

    pub fn load_all_rules(&mut self) {
        self.rules.extend(numeric::get_numeric_rules());
        self.rules.extend(logic::get_logic_rules());
        self.rules.extend(algebraic::get_algebraic_rules());
        self.rules.extend(trigonometric::get_trigonometric_rules());
        self.rules.extend(exponential::get_exponential_rules());
        self.rules.extend(calculus::get_calculus_rules());
    }

    /// Sort by descending priority and build the kind indexes.
    /// The sort is stable: equal priorities keep their load order.
    pub fn order_by_priority(&mut self) {
        self.rules.sort_by_key(|r| std::cmp::Reverse(r.priority()));
        self.build_kind_index();
    }

    fn build_kind_index(&mut self) {
        self.rules_by_kind.clear();
        self.eval_by_kind.clear();

        for rule in &self.rules {
            for &kind in rule.applies_to() {
                self.rules_by_kind
                    .entry(kind)
                    .or_default()
                    .push(Arc::clone(rule));
                if rule.category().is_eval() {
                    self.eval_by_kind
                        .entry(kind)
                        .or_default()
                        .push(Arc::clone(rule));
                }
            }
        }
    }

    /// Get only rules that apply to a specific node kind
    #[inline]
    pub fn get_rules_for_kind(&self, kind: NodeKind) -> &[SharedRule] {
        self.rules_by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Eval-subset rules for a node kind
    #[inline]
    pub fn get_eval_rules_for_kind(&self, kind: NodeKind) -> &[SharedRule] {
        self.eval_by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }
}

/// Global rule registry, built once
pub(crate) fn global_registry() -> &'static RuleRegistry {
    static REGISTRY: OnceLock<RuleRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = RuleRegistry::new();
        registry.load_all_rules();
        registry.order_by_priority();
        registry
    })
}
