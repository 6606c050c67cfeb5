//! Memoized structural properties.
//!
//! Each property is a fold over `direct_children` stored in the global
//! property cache under the node's instance id.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

use super::{Expr, ExprKind};
use crate::core::cache::property_cache;
use crate::core::settings::Settings;
use crate::core::symbol::Symbol;

impl Expr {
    /// Node count: 1 + the complexity of every child.
    /// Walks with an explicit stack, so arbitrarily deep chains are fine.
    pub fn complexity(&self) -> usize {
        let cache = property_cache();
        // The global cache may be cleared mid-walk, so results of this walk
        // are also kept locally
        let mut known: FxHashMap<u64, usize> = FxHashMap::default();
        let mut stack = vec![(self, false)];
        while let Some((node, expanded)) = stack.pop() {
            if known.contains_key(&node.id()) {
                continue;
            }
            if !expanded {
                if let Some(value) = cache.get(node.id(), |p| p.complexity) {
                    known.insert(node.id(), value);
                    continue;
                }
                stack.push((node, true));
                stack.extend(node.direct_children().iter().map(|c| (c, false)));
                continue;
            }
            let value = cache.get_or_compute(
                node.id(),
                |p| p.complexity,
                |p, v| p.complexity = Some(v),
                || {
                    1 + node
                        .direct_children()
                        .iter()
                        .map(|c| known.get(&c.id()).copied().unwrap_or(1))
                        .sum::<usize>()
                },
            );
            known.insert(node.id(), value);
        }
        known.get(&self.id()).copied().unwrap_or(1)
    }

    /// False when a NaN or infinity occurs anywhere in the tree
    pub fn is_finite(&self) -> bool {
        property_cache().get_or_compute(
            self.id(),
            |p| p.is_finite,
            |p, v| p.is_finite = Some(v),
            || {
                let locally_finite = match self.kind() {
                    ExprKind::Number(n) => n.is_finite(),
                    _ => true,
                };
                locally_finite && self.direct_children().iter().all(Expr::is_finite)
            },
        )
    }

    /// Every variable and named constant in the tree
    pub fn vars_and_consts(&self) -> Arc<FxHashSet<Symbol>> {
        property_cache().get_or_compute(
            self.id(),
            |p| p.vars_and_consts.clone(),
            |p, v| p.vars_and_consts = Some(v),
            || {
                let mut set = FxHashSet::default();
                if let ExprKind::Variable(s) = self.kind() {
                    set.insert(s.clone());
                }
                for child in self.direct_children() {
                    set.extend(child.vars_and_consts().iter().cloned());
                }
                Arc::new(set)
            },
        )
    }

    /// Free variables (constants such as `pi` and `e` excluded), sorted by name
    pub fn vars(&self) -> Vec<Symbol> {
        let mut vars: Vec<Symbol> = self
            .vars_and_consts()
            .iter()
            .filter(|s| !s.is_constant())
            .cloned()
            .collect();
        vars.sort();
        vars
    }

    /// Simplicity score under the process-wide settings (lower is simpler)
    pub fn simplicity(&self) -> i64 {
        self.simplicity_with(&Settings::current())
    }

    pub fn simplicity_with(&self, settings: &Settings) -> i64 {
        property_cache().score(self.id(), settings.scorer_id(), || {
            (settings.simplicity_fn())(self)
        })
    }
}
