#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Standard test relaxations")]
mod tests {
    use crate::{Expr, ExprKind, SymbError, clear_property_cache};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(e: &Expr) -> u64 {
        let mut h = DefaultHasher::new();
        e.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_equal_trees_hash_equal() {
        let build = || {
            Expr::and(
                Expr::less(Expr::var("x"), Expr::rational(1, 2)),
                Expr::in_set(Expr::var("y"), Expr::var("S")),
            )
        };
        let (a, b) = (build(), build());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_variant_distinguishes_equal_children() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        assert_ne!(Expr::sum(x.clone(), y.clone()), Expr::mul(x.clone(), y.clone()));
        assert_ne!(Expr::and(x.clone(), y.clone()), Expr::or(x, y));
        assert_ne!(Expr::sin(Expr::var("t")), Expr::cos(Expr::var("t")));
        assert_ne!(Expr::integer(1), Expr::boolean(true));
    }

    #[test]
    fn test_nan_subtree_breaks_equality() {
        let a = Expr::sum(Expr::var("x"), Expr::nan());
        assert_ne!(a, a.clone());
        assert!(!a.is_finite());
    }

    #[test]
    fn test_replace_identity_keeps_instance() {
        let x = Expr::var("x");
        let e = Expr::div(Expr::sin(x.clone()), Expr::sum(x, Expr::integer(1)));
        let same = e.replace(&mut |n: &Expr| n.clone());
        assert!(same.ptr_eq(&e));
    }

    #[test]
    fn test_replace_rebuilds_changed_path_only() {
        let x = Expr::var("x");
        let left = Expr::sin(x.clone());
        let right = Expr::cos(Expr::var("y"));
        let e = Expr::sum(left.clone(), right.clone());
        let swapped = e.replace(&mut |n: &Expr| match n.kind() {
            ExprKind::Variable(s) if s.name() == "x" => Expr::var("z"),
            _ => n.clone(),
        });
        assert_eq!(swapped, Expr::sum(Expr::sin(Expr::var("z")), Expr::cos(Expr::var("y"))));
        match swapped.kind() {
            ExprKind::Sum(_, b) => assert!(b.ptr_eq(&right)),
            other => unreachable!("expected a sum, got {:?}", other),
        }
    }

    #[test]
    fn test_substitute() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        let e = Expr::pow(x.clone(), Expr::integer(2));
        assert_eq!(
            e.substitute(&x, &Expr::integer(3)),
            Expr::pow(Expr::integer(3), Expr::integer(2))
        );
        // Absent variable: same instance
        assert!(e.substitute(&y, &Expr::integer(3)).ptr_eq(&e));
        assert!(y.substitute(&x, &Expr::integer(3)).ptr_eq(&y));
        // Subtree targets are matched structurally
        let target = Expr::pow(Expr::var("x"), Expr::integer(2));
        assert_eq!(Expr::sin(e).substitute(&target, &y), Expr::sin(y));
    }

    #[test]
    fn test_substitute_all_is_sequential() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        let one = Expr::integer(1);
        let e = Expr::sum(x.clone(), y.clone());
        // x -> y first, then y -> 1 sees both occurrences
        let out = e.substitute_all([(&x, &y), (&y, &one)]);
        assert_eq!(out, Expr::sum(one.clone(), one.clone()));
        // Reversed order: y -> 1 first, then x -> y
        let out = e.substitute_all([(&y, &one), (&x, &y)]);
        assert_eq!(out, Expr::sum(y, one));
    }

    #[test]
    fn test_nodes_pre_order() {
        let x = Expr::var("x");
        let e = Expr::mul(Expr::sum(x.clone(), Expr::integer(1)), Expr::sin(x));
        let shown: Vec<String> = e.nodes().map(ToString::to_string).collect();
        assert_eq!(shown, ["(x + 1) * sin(x)", "x + 1", "x", "1", "sin(x)", "x"]);
        // Restartable
        assert_eq!(e.nodes().count(), 6);
        assert_eq!(e.complexity(), 6);
    }

    #[test]
    fn test_contains_node() {
        let x = Expr::var("x");
        let e = Expr::log(Expr::integer(2), Expr::sum(x.clone(), Expr::integer(1)));
        assert!(e.contains_node(&x));
        assert!(e.contains_node(&Expr::sum(Expr::var("x"), Expr::integer(1))));
        assert!(!e.contains_node(&Expr::var("y")));
    }

    #[test]
    fn test_properties_survive_cache_clear() {
        let e = Expr::sum(Expr::var("x"), Expr::var("pi"));
        assert_eq!(e.complexity(), 3);
        clear_property_cache();
        assert_eq!(e.complexity(), 3);
        assert_eq!(e.vars().len(), 1);
    }

    #[test]
    fn test_boolean_literal_parsing() {
        assert_eq!(Expr::try_parse_boolean("true"), Some(Expr::boolean(true)));
        assert_eq!(Expr::try_parse_boolean("false"), Some(Expr::boolean(false)));
        assert_eq!(Expr::try_parse_boolean("True"), None);
        assert!(matches!(
            Expr::parse_boolean("yes"),
            Err(SymbError::InvalidBoolean { .. })
        ));
        assert_eq!(Expr::try_parse_number("1/2"), None);
        assert_eq!(Expr::try_parse_number("0.5"), Some(Expr::rational(1, 2)));
    }

    #[test]
    fn test_derivative_display() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        let inner = Expr::derivative(Expr::sum(x.clone(), Expr::integer(2)), y, 1);
        assert_eq!(inner.to_string(), "derivative(x + 2, y)");
        let outer = Expr::derivative(inner, x, 3);
        assert_eq!(outer.to_string(), "derivative(derivative(x + 2, y), x, 3)");
    }
}
