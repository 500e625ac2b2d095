use std::{fmt, mem};

use num_bigint::BigInt;

/// The arithmetic operators a [`Expr::BinaryOp`] can apply.
///
/// `Sub` exists so a tree can express subtraction, but no parser level ever
/// produces it: the addition level only loops on `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Floor division `/`.
    Div,
    /// Floor modulo `%`.
    Mod,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree node.
///
/// Every child is exclusively owned, so a parsed expression is always a finite
/// tree. Nodes are never mutated after the parser builds them.
///
/// A long operator chain such as `1+1+...+1` is a tree as deep as the chain is
/// long. Evaluation and dropping walk such left spines with a loop, so their
/// stack use does not grow with chain length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: BigInt,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Arithmetic negation `-expr`.
    Negate {
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A parenthesized expression. Evaluates to its inner expression.
    Group {
        /// The wrapped expression.
        expr: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub fn literal(value: impl Into<BigInt>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds a binary node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a negation node.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::Negate { expr: Box::new(expr) }
    }

    /// Builds a grouping node.
    #[must_use]
    pub fn group(expr: Self) -> Self {
        Self::Group { expr: Box::new(expr) }
    }

    /// Moves every child that has children of its own into `out`, leaving a
    /// literal in its place, so the compiler generated drop of this node never
    /// goes more than one level deep.
    fn detach_children(&mut self, out: &mut Vec<Box<Self>>) {
        let mut detach = |child: &mut Box<Self>| {
            if !matches!(**child, Self::Literal { .. }) {
                out.push(mem::replace(child, Box::new(Self::Literal { value: BigInt::default() })));
            }
        };
        match self {
            Self::Literal { .. } => {},
            Self::BinaryOp { left, right, .. } => {
                detach(left);
                detach(right);
            },
            Self::Negate { expr } | Self::Group { expr } => detach(expr),
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut child) = detached.pop() {
            child.detach_children(&mut detached);
        }
    }
}

/// Renders the tree with every binary operation parenthesized, which makes the
/// grouping chosen by the parser visible.
///
/// # Example
/// ```
/// use reckon::ast::{BinaryOperator, Expr};
///
/// let tree = Expr::binary(Expr::literal(2),
///                         BinaryOperator::Mul,
///                         Expr::binary(Expr::literal(3), BinaryOperator::Div, Expr::literal(4)));
/// assert_eq!(tree.to_string(), "(2 * (3 / 4))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Negate { expr } => write!(f, "-{expr}"),
            Self::Group { expr } => write!(f, "{expr}"),
        }
    }
}
