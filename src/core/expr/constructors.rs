//! Expression constructors.
//!
//! Constructors build exactly the node they name. They never simplify;
//! `Expr::sum(x, 0)` is a `Sum` node until the simplifier rewrites it.

use num_bigint::BigInt;

use super::{Expr, ExprKind, Func};
use crate::core::error::SymbError;
use crate::core::number::Number;
use crate::core::symbol::Symbol;

/// Binary node constructors sharing one shape
macro_rules! binary_constructors {
    ($($(#[$doc:meta])* $fn_name:ident => $variant:ident),* $(,)?) => {
        impl Expr {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $fn_name(left: Expr, right: Expr) -> Expr {
                    Expr::new(ExprKind::$variant(left, right))
                }
            )*
        }
    };
}

/// Single-argument built-in function constructors
macro_rules! unary_functions {
    ($($fn_name:ident => $func:ident),* $(,)?) => {
        impl Expr {
            $(
                #[must_use]
                pub fn $fn_name(arg: Expr) -> Expr {
                    Expr::function(Func::$func, vec![arg])
                }
            )*
        }
    };
}

binary_constructors!(
    /// `left + right`
    sum => Sum,
    /// `left - right`
    minus => Minus,
    /// `left * right`
    mul => Mul,
    /// `left / right`
    div => Div,
    /// `left ^ right`
    pow => Pow,
    and => And,
    or => Or,
    xor => Xor,
    /// `left → right`
    implies => Implies,
    equals => Equals,
    greater => Greater,
    greater_or_equal => GreaterOrEqual,
    less => Less,
    less_or_equal => LessOrEqual,
    /// `left ∈ right`
    in_set => In,
);

unary_functions!(
    sin => Sin,
    cos => Cos,
    tan => Tan,
    cotan => Cotan,
    sec => Sec,
    cosec => Cosec,
    arcsin => Arcsin,
    arccos => Arccos,
    arctan => Arctan,
    arccotan => Arccotan,
    abs => Abs,
    signum => Signum,
);

impl Expr {
    // -------------------------------------------------------------------------
    // Leaves
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn number(n: Number) -> Expr {
        Expr::new(ExprKind::Number(n))
    }

    #[must_use]
    pub fn integer(n: impl Into<BigInt>) -> Expr {
        Expr::number(Number::integer(n))
    }

    /// `numer / denom` as a single numeric leaf (downcast when whole)
    #[must_use]
    pub fn rational(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Expr {
        Expr::number(Number::rational(numer, denom))
    }

    #[must_use]
    pub fn from_f64(value: f64) -> Expr {
        Expr::number(Number::from_f64(value))
    }

    #[must_use]
    pub fn nan() -> Expr {
        Expr::number(Number::nan())
    }

    #[must_use]
    pub fn positive_infinity() -> Expr {
        Expr::number(Number::positive_infinity())
    }

    #[must_use]
    pub fn negative_infinity() -> Expr {
        Expr::number(Number::negative_infinity())
    }

    /// Variable (or named constant) leaf
    #[must_use]
    pub fn var(name: &str) -> Expr {
        Expr::new(ExprKind::Variable(Symbol::new(name)))
    }

    #[must_use]
    pub fn symbol(symbol: Symbol) -> Expr {
        Expr::new(ExprKind::Variable(symbol))
    }

    #[must_use]
    pub fn pi() -> Expr {
        Expr::var("pi")
    }

    /// Euler's number
    #[must_use]
    pub fn e() -> Expr {
        Expr::var("e")
    }

    #[must_use]
    pub fn boolean(value: bool) -> Expr {
        Expr::new(ExprKind::Boolean(value))
    }

    /// Boolean literal from its exact token, `true` or `false`
    pub fn try_parse_boolean(text: &str) -> Option<Expr> {
        match text {
            "true" => Some(Expr::boolean(true)),
            "false" => Some(Expr::boolean(false)),
            _ => None,
        }
    }

    pub fn parse_boolean(text: &str) -> Result<Expr, SymbError> {
        Self::try_parse_boolean(text).ok_or_else(|| SymbError::invalid_boolean(text))
    }

    /// Numeric literal leaf, see [`Number::try_parse`]
    pub fn try_parse_number(text: &str) -> Option<Expr> {
        Number::try_parse(text).map(Expr::number)
    }

    // -------------------------------------------------------------------------
    // Composite nodes
    // -------------------------------------------------------------------------

    /// `-1 * arg`
    #[must_use]
    pub fn neg(arg: Expr) -> Expr {
        Expr::mul(Expr::integer(-1), arg)
    }

    /// `arg ^ (1/2)`
    #[must_use]
    pub fn sqrt(arg: Expr) -> Expr {
        Expr::pow(arg, Expr::rational(1, 2))
    }

    #[must_use]
    pub fn function(func: Func, args: Vec<Expr>) -> Expr {
        Expr::new(ExprKind::Function { func, args })
    }

    /// Call of an opaque, user-named function
    #[must_use]
    pub fn call(name: &str, args: Vec<Expr>) -> Expr {
        Expr::function(Func::Custom(Symbol::new(name)), args)
    }

    /// `log(base, x)`
    #[must_use]
    pub fn log(base: Expr, x: Expr) -> Expr {
        Expr::function(Func::Log, vec![base, x])
    }

    /// Natural logarithm, `log(e, x)`
    #[must_use]
    pub fn ln(x: Expr) -> Expr {
        Expr::log(Expr::e(), x)
    }

    /// Unevaluated derivative node
    #[must_use]
    pub fn derivative(expr: Expr, var: Expr, order: u32) -> Expr {
        Expr::new(ExprKind::Derivative { expr, var, order })
    }

    #[must_use]
    pub fn not(arg: Expr) -> Expr {
        Expr::new(ExprKind::Not(arg))
    }
}
