use num_bigint::BigInt;

use crate::ast::Expr;

impl Expr {
    /// Negates an already evaluated operand.
    #[must_use]
    pub fn eval_negate(value: BigInt) -> BigInt {
        -value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation() {
        assert_eq!(Expr::eval_negate(BigInt::from(5)), BigInt::from(-5));
        assert_eq!(Expr::eval_negate(BigInt::from(-5)), BigInt::from(5));
        assert_eq!(Expr::eval_negate(BigInt::from(0)), BigInt::from(0));
        assert_eq!(Expr::eval_negate(BigInt::from(i64::MIN)).to_string(), "9223372036854775808");
    }
}
