//! Derived-property side table.
//!
//! Properties of a node (size, finiteness, variable set, simplicity score,
//! evaluation result) are pure functions of an immutable tree, so they are
//! computed once per node instance and stored here keyed by instance id.
//!
//! Entries are write-once: when two threads race on the same key, the first
//! stored value wins and the other computation is discarded. The table is
//! bounded; when it fills up it is cleared, which only costs recomputation.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::core::error::SymbError;
use crate::core::expr::Expr;
use crate::core::symbol::Symbol;

/// Default number of node entries kept before the table is cleared
pub const DEFAULT_CACHE_CAPACITY: usize = 100_000;

static PROPERTY_CACHE: LazyLock<PropertyCache> =
    LazyLock::new(|| PropertyCache::new(DEFAULT_CACHE_CAPACITY));

pub(crate) fn property_cache() -> &'static PropertyCache {
    &PROPERTY_CACHE
}

#[derive(Default)]
pub(crate) struct CachedProps {
    pub complexity: Option<usize>,
    pub is_finite: Option<bool>,
    pub vars_and_consts: Option<Arc<FxHashSet<Symbol>>>,
    /// `eval` result with the settings generation it was computed under
    pub evaluated: Option<(u64, Expr)>,
}

pub(crate) struct PropertyCache {
    entries: RwLock<FxHashMap<u64, CachedProps>>,
    /// Keyed by (node id, scorer id): scores depend on the scoring function
    scores: RwLock<FxHashMap<(u64, u64), i64>>,
    capacity: usize,
}

impl PropertyCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            scores: RwLock::new(FxHashMap::default()),
            capacity: capacity.max(1),
        }
    }

    /// Look up a property, computing and storing it on a miss.
    ///
    /// `compute` runs without holding the lock, so it may itself query the
    /// cache for child nodes.
    /// Cached value without computing it
    pub fn get<T, R>(&self, id: u64, read: R) -> Option<T>
    where
        R: Fn(&CachedProps) -> Option<T>,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&id).and_then(read)
    }

    pub fn get_or_compute<T, R, W, C>(&self, id: u64, read: R, write: W, compute: C) -> T
    where
        T: Clone,
        R: Fn(&CachedProps) -> Option<T>,
        W: FnOnce(&mut CachedProps, T),
        C: FnOnce() -> T,
    {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(value) = entries.get(&id).and_then(&read) {
                return value;
            }
        }

        let value = compute();

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity && !entries.contains_key(&id) {
            entries.clear();
        }
        let slot = entries.entry(id).or_default();
        if let Some(existing) = read(slot) {
            // Lost the race: keep the first write
            return existing;
        }
        write(slot, value);
        match read(slot) {
            Some(stored) => stored,
            None => invariant_broken("property missing right after being stored"),
        }
    }

    pub fn score(&self, id: u64, scorer: u64, compute: impl FnOnce() -> i64) -> i64 {
        {
            let scores = self.scores.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(&s) = scores.get(&(id, scorer)) {
                return s;
            }
        }
        let value = compute();
        let mut scores = self.scores.write().unwrap_or_else(PoisonError::into_inner);
        if scores.len() >= self.capacity {
            scores.clear();
        }
        *scores.entry((id, scorer)).or_insert(value)
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.scores
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Abort on an engine defect
#[allow(clippy::panic, reason = "broken internal invariants are engine bugs")]
pub(crate) fn invariant_broken(msg: &str) -> ! {
    panic!("{}", SymbError::invariant(msg))
}

/// Drop all cached node properties (they are recomputed on demand)
pub fn clear_property_cache() {
    property_cache().clear();
}
