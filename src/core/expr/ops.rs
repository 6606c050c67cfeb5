//! Operator overloads building (unsimplified) nodes.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use super::Expr;

macro_rules! impl_binary_ops {
    ($($trait:ident :: $method:ident => $ctor:ident),* $(,)?) => {
        $(
            impl $trait for Expr {
                type Output = Expr;
                fn $method(self, rhs: Expr) -> Expr {
                    Expr::$ctor(self, rhs)
                }
            }

            impl $trait<&Expr> for &Expr {
                type Output = Expr;
                fn $method(self, rhs: &Expr) -> Expr {
                    Expr::$ctor(self.clone(), rhs.clone())
                }
            }
        )*
    };
}

impl_binary_ops!(
    Add::add => sum,
    Sub::sub => minus,
    Mul::mul => mul,
    Div::div => div,
    BitAnd::bitand => and,
    BitOr::bitor => or,
    BitXor::bitxor => xor,
);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::neg(self)
    }
}

impl Not for Expr {
    type Output = Expr;
    fn not(self) -> Expr {
        Expr::not(self)
    }
}
