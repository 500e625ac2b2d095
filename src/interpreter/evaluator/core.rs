use num_bigint::BigInt;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the tree and returns its integer value.
    ///
    /// Children are evaluated before their parent, left operand before right.
    /// A [`Expr::Group`] yields its inner value unchanged.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] on division or modulo by zero.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     BigInt,
    ///     ast::{BinaryOperator, Expr},
    /// };
    ///
    /// let tree = Expr::binary(Expr::literal(7), BinaryOperator::Div, Expr::negate(Expr::literal(2)));
    /// assert_eq!(tree.eval(), Ok(BigInt::from(-4)));
    /// ```
    pub fn eval(&self) -> EvalResult<BigInt> {
        match self {
            Self::Literal { value } => Ok(value.clone()),
            Self::BinaryOp { .. } => self.eval_chain(),
            Self::Negate { expr } => Ok(Self::eval_negate(expr.eval()?)),
            Self::Group { expr } => expr.eval(),
        }
    }

    /// Evaluates a binary node by walking down its left operands in a loop.
    ///
    /// The parser folds every operator chain to the left, so `1+1+...+1` has
    /// a left spine as long as the chain. Only right operands and non-binary
    /// nodes are evaluated recursively.
    fn eval_chain(&self) -> EvalResult<BigInt> {
        let mut pending = Vec::new();
        let mut node = self;
        while let Self::BinaryOp { left, op, right } = node {
            pending.push((*op, right.as_ref()));
            node = left.as_ref();
        }

        let mut value = node.eval()?;
        for (op, right) in pending.into_iter().rev() {
            let right = right.eval()?;
            value = Self::eval_binary(op, value, right)?;
        }
        Ok(value)
    }
}
