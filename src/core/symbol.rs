//! Interned variable names.
//!
//! Every distinct name is registered once in a global slot map, so symbols
//! compare and hash by their slot key instead of by string contents.

use rustc_hash::FxHashMap;
use slotmap::{DefaultKey, Key, SlotMap};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Names treated as mathematical constants rather than free variables
pub const CONSTANT_NAMES: [&str; 2] = ["pi", "e"];

struct SymbolRegistry {
    names: SlotMap<DefaultKey, Arc<str>>,
    by_name: FxHashMap<Arc<str>, DefaultKey>,
}

static REGISTRY: LazyLock<RwLock<SymbolRegistry>> = LazyLock::new(|| {
    RwLock::new(SymbolRegistry {
        names: SlotMap::with_key(),
        by_name: FxHashMap::default(),
    })
});

/// An interned name
#[derive(Clone)]
pub struct Symbol {
    key: DefaultKey,
    name: Arc<str>,
}

impl Symbol {
    /// Intern `name`, returning the existing symbol if it was seen before
    pub fn new(name: &str) -> Symbol {
        {
            let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(&key) = registry.by_name.get(name) {
                return Symbol {
                    key,
                    name: registry.names[key].clone(),
                };
            }
        }

        let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have interned it between the two locks
        if let Some(&key) = registry.by_name.get(name) {
            return Symbol {
                key,
                name: registry.names[key].clone(),
            };
        }
        let shared: Arc<str> = Arc::from(name);
        let key = registry.names.insert(shared.clone());
        registry.by_name.insert(shared.clone(), key);
        Symbol { key, name: shared }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable numeric id of the interned slot
    pub fn id(&self) -> u64 {
        self.key.data().as_ffi()
    }

    /// `pi` and `e`
    pub fn is_constant(&self) -> bool {
        CONSTANT_NAMES.contains(&self.name())
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    /// Alphabetical, so orderings do not depend on interning order
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
