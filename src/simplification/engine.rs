//! Core simplification engine with rule-based architecture
//!
//! Implements bottom-up tree traversal, first-match rule application with
//! per-node memoization, cycle detection, a pass ceiling and best-candidate
//! selection by simplicity score.

use super::rules::{NodeKind, RuleContext, global_registry};
use crate::Expr;
use crate::core::settings::Settings;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Default pass ceiling of `Expr::simplify`
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Per-simplifier node cache capacity before clearing (10K entries)
const NODE_CACHE_CAPACITY: usize = 10_000;

/// Main simplification engine with rule-based architecture
pub struct Simplifier {
    /// Rewrite of each visited instance (`None`: no rule applied), keyed by id
    node_cache: FxHashMap<u64, Option<Expr>>,
    cache_capacity: usize,
    max_iterations: usize,
    context: RuleContext,
    eval_only: bool,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplifier {
    /// Simplifier over the process-wide settings
    pub fn new() -> Self {
        Self {
            node_cache: FxHashMap::default(),
            cache_capacity: NODE_CACHE_CAPACITY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            context: RuleContext::default(),
            eval_only: false,
        }
    }

    /// Folding-only simplifier used by `Expr::eval`
    pub(crate) fn evaluator(settings: Arc<Settings>) -> Self {
        let mut simplifier = Self::new();
        simplifier.context = simplifier.context.with_settings(settings);
        simplifier.eval_only = true;
        simplifier
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.context = self.context.with_settings(Arc::new(settings));
        self.node_cache.clear();
        self
    }

    /// Skip rules that are only valid on part of the domain
    pub fn with_domain_safe(mut self, domain_safe: bool) -> Self {
        self.context = self.context.with_domain_safe(domain_safe);
        self.node_cache.clear();
        self
    }

    /// Rewrite to a fixpoint or until the pass ceiling, returning the
    /// simplest candidate seen (ties go to the later one)
    pub fn simplify(&mut self, expr: &Expr) -> Expr {
        let settings = Arc::clone(&self.context.settings);
        let mut current = expr.clone();
        let mut best = expr.clone();
        let mut best_score = best.simplicity_with(&settings);
        // Structural hashes of every pass result, for cycle detection
        let mut seen_hashes: FxHashSet<u64> = FxHashSet::default();
        seen_hashes.insert(current.structural_hash());

        let mut iterations = 0;
        loop {
            if iterations >= self.max_iterations {
                log::warn!(
                    "simplification stopped at the pass ceiling ({}): {}",
                    self.max_iterations,
                    current
                );
                break;
            }
            iterations += 1;

            let previous = current.clone();
            current = current.replace(&mut |node: &Expr| self.apply_rules_to_node(node));
            log::debug!("pass {}: {} -> {}", iterations, previous, current);

            if current.ptr_eq(&previous) || current == previous {
                break;
            }

            let score = current.simplicity_with(&settings);
            if score <= best_score {
                best = current.clone();
                best_score = score;
            }

            if !seen_hashes.insert(current.structural_hash()) {
                log::warn!("simplification cycle detected at pass {}: {}", iterations, current);
                break;
            }
        }

        best
    }

    /// One bottom-up pass without scoring. Folding reaches its fixpoint in a
    /// single pass because every child is folded before its parent.
    pub(crate) fn fold(&mut self, expr: &Expr) -> Expr {
        expr.replace(&mut |node: &Expr| self.apply_rules_to_node(node))
    }

    /// First applicable rule wins; a result equal to the input counts as no match
    fn apply_rules_to_node(&mut self, node: &Expr) -> Expr {
        if let Some(cached) = self.node_cache.get(&node.id()) {
            return cached.clone().unwrap_or_else(|| node.clone());
        }

        let kind = NodeKind::of(node);
        let registry = global_registry();
        let rules = if self.eval_only {
            registry.get_eval_rules_for_kind(kind)
        } else {
            registry.get_rules_for_kind(kind)
        };

        let mut rewritten = None;
        for rule in rules {
            if self.context.domain_safe && rule.alters_domain() {
                continue;
            }
            if let Some(new_expr) = rule.apply(node, &self.context)
                && new_expr != *node
            {
                log::trace!("{}: {} => {}", rule.name(), node, new_expr);
                rewritten = Some(new_expr);
                break;
            }
        }

        // Bound memory: clear if exceeding capacity
        if self.node_cache.len() >= self.cache_capacity {
            self.node_cache.clear();
        }
        self.node_cache.insert(node.id(), rewritten.clone());

        rewritten.unwrap_or_else(|| node.clone())
    }
}
