use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

impl Expr {
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// Division and modulo round toward negative infinity; the remainder takes
    /// the sign of the divisor.
    ///
    /// # Example
    /// ```
    /// use reckon::{BigInt, ast::{BinaryOperator, Expr}};
    ///
    /// assert_eq!(Expr::eval_binary(BinaryOperator::Mod, BigInt::from(-7), BigInt::from(2)),
    ///            Ok(BigInt::from(1)));
    /// assert!(Expr::eval_binary(BinaryOperator::Div, BigInt::from(1), BigInt::from(0)).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: BigInt, right: BigInt) -> EvalResult<BigInt> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero { dividend: left });
                }
                Ok(left.div_floor(&right))
            },
            Mod => {
                if right.is_zero() {
                    return Err(RuntimeError::ModuloByZero { dividend: left });
                }
                Ok(left.mod_floor(&right))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: BinaryOperator, left: i64, right: i64) -> EvalResult<BigInt> {
        Expr::eval_binary(op, BigInt::from(left), BigInt::from(right))
    }

    fn value(n: i64) -> EvalResult<BigInt> {
        Ok(BigInt::from(n))
    }

    #[test]
    fn arithmetic() {
        assert_eq!(apply(BinaryOperator::Add, 2, 3), value(5));
        assert_eq!(apply(BinaryOperator::Sub, 2, 3), value(-1));
        assert_eq!(apply(BinaryOperator::Mul, -4, 3), value(-12));
    }

    #[test]
    fn floor_division_and_modulo() {
        assert_eq!(apply(BinaryOperator::Div, 3, 4), value(0));
        assert_eq!(apply(BinaryOperator::Div, -3, 4), value(-1));
        assert_eq!(apply(BinaryOperator::Div, 7, -2), value(-4));
        assert_eq!(apply(BinaryOperator::Div, -7, -2), value(3));
        assert_eq!(apply(BinaryOperator::Mod, 7, -2), value(-1));
        assert_eq!(apply(BinaryOperator::Mod, -7, 2), value(1));
        assert_eq!(apply(BinaryOperator::Mod, -7, -2), value(-1));
        assert_eq!(apply(BinaryOperator::Mod, 6, -3), value(0));
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(apply(BinaryOperator::Div, 5, 0),
                   Err(RuntimeError::DivisionByZero { dividend: BigInt::from(5) }));
        assert_eq!(apply(BinaryOperator::Mod, 5, 0),
                   Err(RuntimeError::ModuloByZero { dividend: BigInt::from(5) }));
    }

    #[test]
    fn results_past_i64_are_exact() {
        assert_eq!(apply(BinaryOperator::Add, i64::MAX, 1).map(|n| n.to_string()),
                   Ok("9223372036854775808".to_string()));
        assert_eq!(apply(BinaryOperator::Mul, i64::MAX, i64::MAX).map(|n| n.to_string()),
                   Ok("85070591730234615847396907784232501249".to_string()));
        assert_eq!(apply(BinaryOperator::Div, i64::MIN, -1).map(|n| n.to_string()),
                   Ok("9223372036854775808".to_string()));
        assert_eq!(apply(BinaryOperator::Mod, i64::MIN, -1), value(0));
    }
}
