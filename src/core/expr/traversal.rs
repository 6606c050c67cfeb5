//! Tree traversal and the node-replacement protocol.

use super::{Expr, ExprKind};

/// Lazy depth-first, pre-order walk over a tree
pub struct Nodes<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost child is visited first
        self.stack.extend(node.direct_children().iter().rev());
        Some(node)
    }
}

impl Expr {
    /// The node itself, then each child's full traversal, left to right.
    /// Every call starts a fresh traversal.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Rebuild this node with every direct child mapped through `f`.
    ///
    /// Returns the same instance when no child changed identity.
    pub fn map_children<F>(&self, mut f: F) -> Expr
    where
        F: FnMut(&Expr) -> Expr,
    {
        let children = self.direct_children();
        if children.is_empty() {
            return self.clone();
        }

        let mapped: Vec<Expr> = children.iter().map(&mut f).collect();
        let changed = mapped
            .iter()
            .zip(children.iter())
            .any(|(new, old)| !new.ptr_eq(old));
        if !changed {
            return self.clone();
        }
        Expr::new(self.kind().with_children(mapped))
    }

    /// Bottom-up transform: children are replaced first, then `f` sees the
    /// (possibly rebuilt) node. Nodes are only rebuilt when a child changed.
    pub fn replace<F>(&self, f: &mut F) -> Expr
    where
        F: FnMut(&Expr) -> Expr,
    {
        let rebuilt = self.map_children(|child| child.replace(f));
        f(&rebuilt)
    }

    /// Replace every subtree structurally equal to `x` with `value`
    pub fn substitute(&self, x: &Expr, value: &Expr) -> Expr {
        if self == x {
            return value.clone();
        }
        if matches!(x.kind(), ExprKind::Variable(_)) && !self.contains_node(x) {
            return self.clone();
        }
        self.map_children(|child| child.substitute(x, value))
    }

    /// Apply substitutions in order; each one sees the result of the previous
    pub fn substitute_all<'a, I>(&self, pairs: I) -> Expr
    where
        I: IntoIterator<Item = (&'a Expr, &'a Expr)>,
    {
        pairs
            .into_iter()
            .fold(self.clone(), |acc, (x, value)| acc.substitute(x, value))
    }

    /// Whether `x` occurs anywhere in the tree.
    /// Variables are answered from the cached variable set.
    pub fn contains_node(&self, x: &Expr) -> bool {
        match x.kind() {
            ExprKind::Variable(symbol) => self.vars_and_consts().contains(symbol),
            _ => self.nodes().any(|node| node == x),
        }
    }
}

impl ExprKind {
    /// Same variant with new children, in `direct_children` order
    fn with_children(&self, children: Vec<Expr>) -> ExprKind {
        let mut it = children.into_iter();
        let mut next = || it.next().unwrap_or_else(|| super::PLACEHOLDER.clone());
        match self {
            ExprKind::Number(_) | ExprKind::Variable(_) | ExprKind::Boolean(_) => self.clone(),
            ExprKind::Function { func, .. } => ExprKind::Function {
                func: func.clone(),
                args: std::iter::from_fn(|| Some(next())).take(self.arity()).collect(),
            },
            ExprKind::Derivative { order, .. } => ExprKind::Derivative {
                expr: next(),
                var: next(),
                order: *order,
            },
            ExprKind::Not(_) => ExprKind::Not(next()),
            ExprKind::Sum(..) => ExprKind::Sum(next(), next()),
            ExprKind::Minus(..) => ExprKind::Minus(next(), next()),
            ExprKind::Mul(..) => ExprKind::Mul(next(), next()),
            ExprKind::Div(..) => ExprKind::Div(next(), next()),
            ExprKind::Pow(..) => ExprKind::Pow(next(), next()),
            ExprKind::And(..) => ExprKind::And(next(), next()),
            ExprKind::Or(..) => ExprKind::Or(next(), next()),
            ExprKind::Xor(..) => ExprKind::Xor(next(), next()),
            ExprKind::Implies(..) => ExprKind::Implies(next(), next()),
            ExprKind::Equals(..) => ExprKind::Equals(next(), next()),
            ExprKind::Greater(..) => ExprKind::Greater(next(), next()),
            ExprKind::GreaterOrEqual(..) => ExprKind::GreaterOrEqual(next(), next()),
            ExprKind::Less(..) => ExprKind::Less(next(), next()),
            ExprKind::LessOrEqual(..) => ExprKind::LessOrEqual(next(), next()),
            ExprKind::In(..) => ExprKind::In(next(), next()),
        }
    }

    fn arity(&self) -> usize {
        match self {
            ExprKind::Function { args, .. } => args.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Standard test relaxations")]
mod tests {
    use crate::Expr;

    #[test]
    fn test_nodes_pre_order() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        let e = Expr::mul(Expr::sum(x.clone(), y.clone()), Expr::sin(x.clone()));
        let order: Vec<String> = e.nodes().map(|n| n.to_string()).collect();
        assert_eq!(order, ["(x + y) * sin(x)", "x + y", "x", "y", "sin(x)", "x"]);
        // Restartable
        assert_eq!(e.nodes().count(), 6);
    }

    #[test]
    fn test_replace_identity_keeps_instance() {
        let e = Expr::sum(Expr::var("x"), Expr::cos(Expr::var("y")));
        let same = e.replace(&mut |n| n.clone());
        assert!(same.ptr_eq(&e));
    }

    #[test]
    fn test_replace_sees_transformed_children() {
        let x = Expr::var("x");
        let e = Expr::sum(x.clone(), Expr::sum(x.clone(), Expr::integer(1)));
        let mut seen = Vec::new();
        let out = e.replace(&mut |n| {
            seen.push(n.to_string());
            if n == &Expr::var("x") { Expr::var("z") } else { n.clone() }
        });
        assert_eq!(out.to_string(), "z + z + 1");
        assert_eq!(seen.last().unwrap(), "z + z + 1");
    }

    #[test]
    fn test_substitute_preserves_untouched_instances() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        let unrelated = Expr::sin(y.clone());
        let e = Expr::sum(x.clone(), unrelated.clone());
        let out = e.substitute(&x, &Expr::integer(3));
        assert_eq!(out, Expr::sum(Expr::integer(3), Expr::sin(y.clone())));
        assert!(out.direct_children()[1].ptr_eq(&unrelated));

        // A leaf that is not the target returns itself
        assert!(y.substitute(&x, &Expr::integer(3)).ptr_eq(&y));
    }

    #[test]
    fn test_substitute_composite_target() {
        let x = Expr::var("x");
        let target = Expr::sin(x.clone());
        let e = Expr::pow(Expr::sin(x.clone()), Expr::integer(2));
        let out = e.substitute(&target, &Expr::var("s"));
        assert_eq!(out, Expr::pow(Expr::var("s"), Expr::integer(2)));
    }

    #[test]
    fn test_substitute_all_is_sequential() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        let e = Expr::sum(x.clone(), Expr::integer(1));
        let y_plus_one = Expr::sum(y.clone(), Expr::integer(1));
        let two = Expr::integer(2);
        // x -> y, then y -> 2: the second substitution sees the first
        let out = e.substitute_all([(&x, &y), (&y, &two)]);
        assert_eq!(out, Expr::sum(Expr::integer(2), Expr::integer(1)));
        let reversed = e.substitute_all([(&y, &two), (&x, &y)]);
        assert_eq!(reversed, y_plus_one);
    }

    #[test]
    fn test_contains_node() {
        let x = Expr::var("x");
        let e = Expr::cos(Expr::pow(x.clone(), Expr::integer(3)));
        assert!(e.contains_node(&x));
        assert!(!e.contains_node(&Expr::var("y")));
        assert!(e.contains_node(&Expr::pow(x.clone(), Expr::integer(3))));
        assert!(!e.contains_node(&Expr::pow(x, Expr::integer(2))));
    }
}
