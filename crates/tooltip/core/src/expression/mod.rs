//! Restricted arithmetic expressions found inside placeholders.
//!
//! Tooltips mostly contain a bare name (`{{ totaldamage }}`) or a name scaled by
//! a constant (`{{ e1*100 }}`, `{{ -cooldownreduction }}`). The parser accepts a
//! little more than that (calls, comparisons, `%`, `**`) so such input can be
//! recognized and skipped instead of being reported as broken.
//!
//! ## Guard
//!
//! An expression is evaluated only when it is [simple](Expr::is_simple) and
//! contains exactly one identifier occurrence:
//!
//! ```
//! # use tooltip_core::expression::Expr;
//! let scaled = Expr::parse("e1 * 2").unwrap();
//! assert!(scaled.is_simple() && scaled.identifier_count() == 1);
//!
//! let pair = Expr::parse("e1 + e2").unwrap();
//! assert_eq!(pair.identifier_count(), 2);
//! ```

pub mod evaluate;
pub mod parse;

pub use evaluate::{evaluate, evaluate_guarded};
pub use parse::{MAX_EXPRESSION_DEPTH, ParseError};

/// Binary operators recognized by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl BinOp {
    /// True for the four operators the evaluator supports.
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Source spelling of the operator.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

/// Unary sign operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
}

/// Parsed placeholder expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal (`2`, `0.5`, `1e3`).
    Number(f64),

    /// Placeholder name, dots included (`e1`, `spell.q`).
    Ident(String),

    /// Unary sign (`-x`).
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Binary operation (`a * b`).
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Function call (`max(a, b)`); never evaluated.
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    /// Parses placeholder text into an expression tree.
    pub fn parse(source: &str) -> Result<Expr, ParseError> {
        parse::parse(source)
    }

    /// True when the tree only uses identifiers, numbers, unary sign and
    /// `+ - * /`.
    pub fn is_simple(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Ident(_) => true,
            Expr::Unary { operand, .. } => operand.is_simple(),
            Expr::Binary { op, left, right } => {
                op.is_arithmetic() && left.is_simple() && right.is_simple()
            }
            Expr::Call { .. } => false,
        }
    }

    /// Counts identifier occurrences; the same name used twice counts twice.
    pub fn identifier_count(&self) -> usize {
        match self {
            Expr::Ident(_) => 1,
            Expr::Number(_) | Expr::Call { .. } => 0,
            Expr::Unary { operand, .. } => operand.identifier_count(),
            Expr::Binary { left, right, .. } => left.identifier_count() + right.identifier_count(),
        }
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Expr::Number(n) => format!("number {n}"),
            Expr::Ident(name) => format!("name '{name}'"),
            Expr::Unary { op, .. } => format!("unary {op:?}"),
            Expr::Binary { op, .. } => format!("operator '{}'", op.symbol()),
            Expr::Call { name, args } => format!("call {name}() with {} args", args.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(source: &str) -> Expr {
        Expr::parse(source).expect("expression should parse")
    }

    #[test]
    fn bare_names_and_scaled_names_are_simple() {
        for source in ["e1", "e1*2", "-cooldown", "+e2 / 100", "(e1 + 10) * 2", "spell.q"] {
            let expr = parsed(source);
            assert!(expr.is_simple(), "{source} should be simple");
            assert_eq!(expr.identifier_count(), 1, "{source}");
        }
    }

    #[test]
    fn two_names_are_counted() {
        assert_eq!(parsed("e1+e2").identifier_count(), 2);
        assert_eq!(parsed("e1*e2").identifier_count(), 2);
        assert_eq!(parsed("e1*e1").identifier_count(), 2);
        assert_eq!(parsed("100").identifier_count(), 0);
    }

    #[test]
    fn calls_and_comparisons_are_not_simple() {
        assert!(!parsed("max(e1, 2)").is_simple());
        assert!(!parsed("e1 > 2").is_simple());
        assert!(!parsed("e1 % 2").is_simple());
        assert!(!parsed("e1 ** 2").is_simple());
    }
}
