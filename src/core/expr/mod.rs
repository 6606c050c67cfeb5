//! Immutable expression trees.
//!
//! This module defines:
//! - `Expr` - a cheap, clonable handle to an immutable node
//! - `ExprKind` - the variants of expression nodes
//! - `Func` - built-in and user-named functions
//! - `Priority` - operator binding strength used for parenthesization
//!
//! # Architecture
//!
//! ## Instance identity vs structure
//! Every node carries a unique `id` assigned at construction and a
//! precomputed structural `hash`. Equality is structural (same variant,
//! pairwise-equal children) with a hash fast-reject. The `id` identifies an
//! instance and keys the derived-property cache, so two structurally equal
//! trees built separately never share cache entries.
//!
//! ## Structural sharing
//! `Expr::clone` shares the node. Tree transformations rebuild a node only
//! when one of its children actually changed, which `Expr::ptr_eq` detects.
//!
//! ## Depth
//! Construction, `Drop`, equality and `complexity` use explicit stacks and
//! accept trees of any depth. Rendering, substitution, simplification and
//! differentiation recurse once per level and are meant for trees a few
//! thousand levels deep at most.
//!
//! # Usage
//!
//! ```
//! use symb_kernel::Expr;
//!
//! let x = Expr::var("x");
//! let expr = Expr::pow(x.clone(), Expr::integer(2)) + Expr::sin(x);
//! assert_eq!(expr.to_string(), "x^2 + sin(x)");
//! ```

mod analysis;
mod constructors;
mod hash;
mod ops;
mod ordering;
mod traversal;

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, OnceLock};

use crate::core::number::Number;
use crate::core::symbol::Symbol;

pub use hash::compute_expr_hash;
pub use ordering::expr_cmp;
pub use traversal::Nodes;

// =============================================================================
// EXPRESSION ID COUNTER
// =============================================================================

static EXPR_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    EXPR_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Shared leaf swapped into dropped nodes while their children are drained
static PLACEHOLDER: LazyLock<Expr> = LazyLock::new(|| Expr::new(ExprKind::Boolean(false)));

// =============================================================================
// EXPR - handle to an immutable node
// =============================================================================

pub(crate) struct Node {
    /// Unique per constructed instance; never reused
    id: u64,
    /// Structural hash, equal for structurally equal trees
    hash: u64,
    kind: ExprKind,
    /// Direct children, materialized on first request
    children: OnceLock<Box<[Expr]>>,
}

/// A symbolic expression.
///
/// Cloning is cheap and shares the underlying node.
#[derive(Clone)]
pub struct Expr(Arc<Node>);

impl Expr {
    /// Wrap a kind into a fresh node instance
    pub fn new(kind: ExprKind) -> Expr {
        let hash = compute_expr_hash(&kind);
        Expr(Arc::new(Node {
            id: next_id(),
            hash,
            kind,
            children: OnceLock::new(),
        }))
    }

    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.0.kind
    }

    /// Instance id (distinct for every constructed node)
    #[inline]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Precomputed structural hash
    #[inline]
    pub fn structural_hash(&self) -> u64 {
        self.0.hash
    }

    /// True when both handles point at the same node instance
    #[inline]
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Immediate operands in variant order (empty for leaves).
    /// Computed once per instance.
    pub fn direct_children(&self) -> &[Expr] {
        self.0
            .children
            .get_or_init(|| self.0.kind.collect_children().into_boxed_slice())
    }

    /// Binding strength of the node's top-level operator
    pub fn priority(&self) -> Priority {
        match self.kind() {
            ExprKind::Number(n) => match n {
                _ if n.is_negative() => Priority::Mul,
                Number::Rational(_) => Priority::Mul,
                Number::Complex(c) if !c.re.is_zero() => Priority::Sum,
                _ => Priority::Leaf,
            },
            ExprKind::Variable(_) | ExprKind::Boolean(_) => Priority::Leaf,
            ExprKind::Sum(..) | ExprKind::Minus(..) => Priority::Sum,
            ExprKind::Mul(..) | ExprKind::Div(..) => Priority::Mul,
            ExprKind::Pow(..) => Priority::Pow,
            ExprKind::Function { .. } | ExprKind::Derivative { .. } => Priority::Func,
            ExprKind::Not(_) => Priority::Negation,
            ExprKind::And(..) => Priority::Conjunction,
            ExprKind::Or(..) | ExprKind::Xor(..) => Priority::Disjunction,
            ExprKind::Implies(..) => Priority::Implication,
            ExprKind::Equals(..) => Priority::Equality,
            ExprKind::Greater(..)
            | ExprKind::GreaterOrEqual(..)
            | ExprKind::Less(..)
            | ExprKind::LessOrEqual(..) => Priority::Comparison,
            ExprKind::In(..) => Priority::Membership,
        }
    }

    /// Boolean-valued node: literal, connective, comparison or membership
    pub fn is_statement(&self) -> bool {
        matches!(
            self.kind(),
            ExprKind::Boolean(_)
                | ExprKind::Not(_)
                | ExprKind::And(..)
                | ExprKind::Or(..)
                | ExprKind::Xor(..)
                | ExprKind::Implies(..)
                | ExprKind::Equals(..)
                | ExprKind::Greater(..)
                | ExprKind::GreaterOrEqual(..)
                | ExprKind::Less(..)
                | ExprKind::LessOrEqual(..)
                | ExprKind::In(..)
        )
    }

    /// Operand accepted by boolean rewrites: a statement or a variable
    pub fn is_logic(&self) -> bool {
        self.is_statement() || matches!(self.kind(), ExprKind::Variable(_))
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self.kind() {
            ExprKind::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind() {
            ExprKind::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self.kind() {
            ExprKind::Variable(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Number::is_zero)
    }

    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// A number that is NaN
    pub fn is_nan(&self) -> bool {
        self.as_number().is_some_and(Number::is_nan)
    }
}

impl Deref for Expr {
    type Target = ExprKind;
    fn deref(&self) -> &Self::Target {
        &self.0.kind
    }
}

// Structural equality (with hash fast-reject), compared pairwise with an
// explicit stack so deep trees do not overflow
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.0.hash != b.0.hash || !a.0.kind.same_head(&b.0.kind) {
                return false;
            }
            let (left, right) = (a.direct_children(), b.direct_children());
            if left.len() != right.len() {
                return false;
            }
            stack.extend(left.iter().zip(right.iter()));
        }
        true
    }
}

// NaN leaves make this non-reflexive, the same way f64 is. Everything else
// about the relation is a proper equivalence.
impl Eq for Expr {}

impl std::hash::Hash for Expr {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash.hash(state);
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0.kind, f)
    }
}

// =============================================================================
// EXPRKIND
// =============================================================================

/// Built-in and user-named functions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Cotan,
    Sec,
    Cosec,
    Arcsin,
    Arccos,
    Arctan,
    Arccotan,
    /// `log(base, x)`
    Log,
    Abs,
    Signum,
    /// Opaque function known only by name
    Custom(Symbol),
}

impl Func {
    pub fn name(&self) -> &str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Cotan => "cotan",
            Func::Sec => "sec",
            Func::Cosec => "cosec",
            Func::Arcsin => "arcsin",
            Func::Arccos => "arccos",
            Func::Arctan => "arctan",
            Func::Arccotan => "arccotan",
            Func::Log => "log",
            Func::Abs => "abs",
            Func::Signum => "signum",
            Func::Custom(symbol) => symbol.name(),
        }
    }
}

/// The kind (structure) of an expression node
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Number(Number),
    /// Free variable or named constant (`pi`, `e`)
    Variable(Symbol),
    Boolean(bool),

    Sum(Expr, Expr),
    Minus(Expr, Expr),
    Mul(Expr, Expr),
    Div(Expr, Expr),
    Pow(Expr, Expr),

    Function {
        func: Func,
        args: Vec<Expr>,
    },

    /// Unevaluated `d^order/d var^order` of `expr`
    Derivative {
        expr: Expr,
        var: Expr,
        order: u32,
    },

    Not(Expr),
    And(Expr, Expr),
    Or(Expr, Expr),
    Xor(Expr, Expr),
    Implies(Expr, Expr),

    Equals(Expr, Expr),
    Greater(Expr, Expr),
    GreaterOrEqual(Expr, Expr),
    Less(Expr, Expr),
    LessOrEqual(Expr, Expr),
    /// `element ∈ set`
    In(Expr, Expr),
}

impl ExprKind {
    /// Same variant with equal non-child payload
    fn same_head(&self, other: &ExprKind) -> bool {
        match (self, other) {
            (ExprKind::Number(a), ExprKind::Number(b)) => a == b,
            (ExprKind::Variable(a), ExprKind::Variable(b)) => a == b,
            (ExprKind::Boolean(a), ExprKind::Boolean(b)) => a == b,
            (ExprKind::Function { func: f, .. }, ExprKind::Function { func: g, .. }) => f == g,
            (ExprKind::Derivative { order: m, .. }, ExprKind::Derivative { order: n, .. }) => {
                m == n
            }
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }

    fn collect_children(&self) -> Vec<Expr> {
        match self {
            ExprKind::Number(_) | ExprKind::Variable(_) | ExprKind::Boolean(_) => Vec::new(),
            ExprKind::Function { args, .. } => args.clone(),
            ExprKind::Derivative { expr, var, .. } => vec![expr.clone(), var.clone()],
            ExprKind::Not(a) => vec![a.clone()],
            ExprKind::Sum(a, b)
            | ExprKind::Minus(a, b)
            | ExprKind::Mul(a, b)
            | ExprKind::Div(a, b)
            | ExprKind::Pow(a, b)
            | ExprKind::And(a, b)
            | ExprKind::Or(a, b)
            | ExprKind::Xor(a, b)
            | ExprKind::Implies(a, b)
            | ExprKind::Equals(a, b)
            | ExprKind::Greater(a, b)
            | ExprKind::GreaterOrEqual(a, b)
            | ExprKind::Less(a, b)
            | ExprKind::LessOrEqual(a, b)
            | ExprKind::In(a, b) => vec![a.clone(), b.clone()],
        }
    }
}

/// Binding strength, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Implication,
    Disjunction,
    Conjunction,
    Negation,
    Equality,
    Comparison,
    Membership,
    Sum,
    Mul,
    Pow,
    Func,
    Leaf,
}

// =============================================================================
// DROP IMPLEMENTATION - Iterative drop to prevent stack overflow
// =============================================================================

impl Drop for Node {
    fn drop(&mut self) {
        fn drain_children(kind: &mut ExprKind, queue: &mut Vec<Expr>) {
            let placeholder = || PLACEHOLDER.clone();
            match kind {
                ExprKind::Number(_) | ExprKind::Variable(_) | ExprKind::Boolean(_) => {}
                ExprKind::Function { args, .. } => {
                    queue.extend(std::mem::take(args));
                }
                ExprKind::Derivative { expr, var, .. } => {
                    queue.push(std::mem::replace(expr, placeholder()));
                    queue.push(std::mem::replace(var, placeholder()));
                }
                ExprKind::Not(a) => {
                    queue.push(std::mem::replace(a, placeholder()));
                }
                ExprKind::Sum(a, b)
                | ExprKind::Minus(a, b)
                | ExprKind::Mul(a, b)
                | ExprKind::Div(a, b)
                | ExprKind::Pow(a, b)
                | ExprKind::And(a, b)
                | ExprKind::Or(a, b)
                | ExprKind::Xor(a, b)
                | ExprKind::Implies(a, b)
                | ExprKind::Equals(a, b)
                | ExprKind::Greater(a, b)
                | ExprKind::GreaterOrEqual(a, b)
                | ExprKind::Less(a, b)
                | ExprKind::LessOrEqual(a, b)
                | ExprKind::In(a, b) => {
                    queue.push(std::mem::replace(a, placeholder()));
                    queue.push(std::mem::replace(b, placeholder()));
                }
            }
        }

        if matches!(
            self.kind,
            ExprKind::Number(_) | ExprKind::Variable(_) | ExprKind::Boolean(_)
        ) {
            return;
        }

        // Release the memoized child handles first so the kind holds the
        // only remaining references
        drop(self.children.take());

        let mut work_queue = Vec::new();
        drain_children(&mut self.kind, &mut work_queue);

        while let Some(child) = work_queue.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child.0) {
                drop(node.children.take());
                drain_children(&mut node.kind, &mut work_queue);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
