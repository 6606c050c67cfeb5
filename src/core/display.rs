//! Display implementations for expressions.
//!
//! Two output formats:
//!
//! ## Standard Display (`to_string()` / `{}`)
//! - `x^2 + 2 * x + 1`
//! - `sin(x) + log(2, y)`, `ln(x)` for base `e`
//! - `a and not b`, `x in S`
//!
//! ## LaTeX Format (`to_latex()`)
//! - `x^{2} + 2 \cdot x + 1`
//! - `\sin\left(x\right)`, `\frac{a}{b}`, `\left|x\right|`
//!
//! Numeric special values render as `NaN`, `+oo`, `-oo` in standard form and
//! as `\mathrm{undefined}`, `\infty`, `-\infty` in LaTeX.

use std::fmt::{self, Write as _};

use crate::core::expr::{Expr, ExprKind, Func, Priority};
use crate::functions::registry::Registry;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormatMode {
    Standard,
    Latex,
}

/// Which side of a binary operator a child sits on
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

const GREEK: [&str; 24] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega",
];

fn latex_symbol(name: &str) -> String {
    if GREEK.contains(&name) {
        format!(r"\{}", name)
    } else if name.chars().count() > 1 {
        format!(r"\mathrm{{{}}}", name)
    } else {
        name.to_string()
    }
}

fn is_natural_base(base: &Expr) -> bool {
    base.as_symbol().is_some_and(|s| s.name() == "e")
}

/// Operators whose right operand needs grouping at equal priority
fn is_right_strict(kind: &ExprKind) -> bool {
    matches!(
        kind,
        ExprKind::Minus(..)
            | ExprKind::Div(..)
            | ExprKind::Pow(..)
            | ExprKind::Implies(..)
            | ExprKind::Equals(..)
            | ExprKind::Greater(..)
            | ExprKind::GreaterOrEqual(..)
            | ExprKind::Less(..)
            | ExprKind::LessOrEqual(..)
            | ExprKind::In(..)
    )
}

struct Renderer {
    mode: FormatMode,
    out: String,
}

impl Renderer {
    fn new(mode: FormatMode) -> Self {
        Self {
            mode,
            out: String::new(),
        }
    }

    fn open(&mut self) {
        self.out.push_str(match self.mode {
            FormatMode::Standard => "(",
            FormatMode::Latex => r"\left(",
        });
    }

    fn close(&mut self) {
        self.out.push_str(match self.mode {
            FormatMode::Standard => ")",
            FormatMode::Latex => r"\right)",
        });
    }

    fn grouped(&mut self, expr: &Expr) {
        self.open();
        self.render(expr);
        self.close();
    }

    /// Render a child, parenthesized when it binds weaker than its parent
    fn operand(&mut self, child: &Expr, parent: &Expr, side: Side) {
        let (cp, pp) = (child.priority(), parent.priority());
        let needs_parens = match parent.kind() {
            ExprKind::Pow(..) => cp <= Priority::Pow,
            kind => cp < pp || (side == Side::Right && cp == pp && is_right_strict(kind)),
        };
        if needs_parens {
            self.grouped(child);
        } else {
            self.render(child);
        }
    }

    fn infix(&mut self, expr: &Expr, a: &Expr, b: &Expr, op: &str) {
        self.operand(a, expr, Side::Left);
        self.out.push_str(op);
        self.operand(b, expr, Side::Right);
    }

    fn args(&mut self, args: &[Expr]) {
        self.open();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.render(arg);
        }
        self.close();
    }

    fn render(&mut self, expr: &Expr) {
        let latex = self.mode == FormatMode::Latex;
        match expr.kind() {
            ExprKind::Number(n) => {
                if latex {
                    self.out.push_str(&n.to_latex());
                } else {
                    let _ = write!(self.out, "{}", n);
                }
            }
            ExprKind::Variable(s) => {
                if latex {
                    self.out.push_str(&latex_symbol(s.name()));
                } else {
                    self.out.push_str(s.name());
                }
            }
            ExprKind::Boolean(b) => {
                let text = match (latex, b) {
                    (false, true) => "true",
                    (false, false) => "false",
                    (true, true) => r"\top",
                    (true, false) => r"\bot",
                };
                self.out.push_str(text);
            }
            ExprKind::Sum(a, b) => self.infix(expr, a, b, " + "),
            ExprKind::Minus(a, b) => self.infix(expr, a, b, " - "),
            ExprKind::Mul(a, b) => {
                self.infix(expr, a, b, if latex { r" \cdot " } else { " * " });
            }
            ExprKind::Div(a, b) => {
                if latex {
                    self.out.push_str(r"\frac{");
                    self.render(a);
                    self.out.push_str("}{");
                    self.render(b);
                    self.out.push('}');
                } else {
                    self.infix(expr, a, b, " / ");
                }
            }
            ExprKind::Pow(base, exp) => {
                if latex {
                    self.out.push('{');
                    self.operand(base, expr, Side::Left);
                    self.out.push_str("}^{");
                    self.render(exp);
                    self.out.push('}');
                } else {
                    self.infix(expr, base, exp, "^");
                }
            }
            ExprKind::Function { func, args } => self.function(func, args),
            ExprKind::Derivative {
                expr: inner,
                var,
                order,
            } => {
                if latex {
                    if *order == 1 {
                        self.out.push_str(r"\frac{\mathrm{d}}{\mathrm{d}");
                        self.render(var);
                        self.out.push('}');
                    } else {
                        let _ = write!(self.out, r"\frac{{\mathrm{{d}}^{{{}}}}}{{\mathrm{{d}}", order);
                        self.render(var);
                        let _ = write!(self.out, "^{{{}}}}}", order);
                    }
                    self.out.push_str(r"\left[");
                    self.render(inner);
                    self.out.push_str(r"\right]");
                } else {
                    self.out.push_str("derivative(");
                    self.render(inner);
                    self.out.push_str(", ");
                    self.render(var);
                    if *order != 1 {
                        let _ = write!(self.out, ", {}", order);
                    }
                    self.out.push(')');
                }
            }
            ExprKind::Not(a) => {
                self.out.push_str(if latex { r"\neg " } else { "not " });
                self.operand(a, expr, Side::Right);
            }
            ExprKind::And(a, b) => self.infix(expr, a, b, if latex { r" \land " } else { " and " }),
            ExprKind::Or(a, b) => self.infix(expr, a, b, if latex { r" \lor " } else { " or " }),
            ExprKind::Xor(a, b) => self.infix(expr, a, b, if latex { r" \oplus " } else { " xor " }),
            ExprKind::Implies(a, b) => {
                self.infix(expr, a, b, if latex { r" \implies " } else { " implies " });
            }
            ExprKind::Equals(a, b) => self.infix(expr, a, b, " = "),
            ExprKind::Greater(a, b) => self.infix(expr, a, b, " > "),
            ExprKind::GreaterOrEqual(a, b) => {
                self.infix(expr, a, b, if latex { r" \geq " } else { " >= " });
            }
            ExprKind::Less(a, b) => self.infix(expr, a, b, " < "),
            ExprKind::LessOrEqual(a, b) => {
                self.infix(expr, a, b, if latex { r" \leq " } else { " <= " });
            }
            ExprKind::In(a, b) => self.infix(expr, a, b, if latex { r" \in " } else { " in " }),
        }
    }

    fn function(&mut self, func: &Func, args: &[Expr]) {
        let latex = self.mode == FormatMode::Latex;
        match (func, args) {
            (Func::Log, [base, x]) if is_natural_base(base) => {
                self.out.push_str(if latex { r"\ln" } else { "ln" });
                self.args(std::slice::from_ref(x));
            }
            (Func::Log, [base, x]) if latex => {
                self.out.push_str(r"\log_{");
                self.render(base);
                self.out.push('}');
                self.args(std::slice::from_ref(x));
            }
            (Func::Abs, [x]) if latex => {
                self.out.push_str(r"\left|");
                self.render(x);
                self.out.push_str(r"\right|");
            }
            _ if latex => {
                match Registry::for_func(func) {
                    Some(def) => self.out.push_str(def.latex),
                    None => {
                        let _ = write!(self.out, r"\operatorname{{{}}}", func.name());
                    }
                }
                self.args(args);
            }
            _ => {
                self.out.push_str(func.name());
                self.args(args);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderer = Renderer::new(FormatMode::Standard);
        renderer.render(self);
        f.write_str(&renderer.out)
    }
}

impl Expr {
    /// LaTeX markup for the expression
    pub fn to_latex(&self) -> String {
        let mut renderer = Renderer::new(FormatMode::Latex);
        renderer.render(self);
        renderer.out
    }
}
