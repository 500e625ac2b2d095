use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition expressions.
    ///
    /// Only `+` is recognized at this level. A `-` after an operand is left
    /// for the caller, so `5-3` stops after `5`.
    ///
    /// The rule is: `addition := multiplication ("+" multiplication)*`
    pub(crate) fn parse_addition(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(BinaryOperator::Add, Self::parse_multiplication)
    }

    /// Parses multiplication expressions, the loosest of the three
    /// multiplicative levels.
    ///
    /// The rule is: `multiplication := division ("*" division)*`
    pub(crate) fn parse_multiplication(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(BinaryOperator::Mul, Self::parse_division)
    }

    /// Parses division expressions.
    ///
    /// The rule is: `division := modulo ("/" modulo)*`
    pub(crate) fn parse_division(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(BinaryOperator::Div, Self::parse_modulo)
    }

    /// Parses modulo expressions, the tightest binary level.
    ///
    /// The rule is: `modulo := negation ("%" negation)*`
    pub(crate) fn parse_modulo(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(BinaryOperator::Mod, Self::parse_negation)
    }

    /// Parses one binary level.
    ///
    /// Reads an operand with `parse_operand`, then, while the current token is
    /// exactly `op`, consumes it, reads another operand and folds the pair into
    /// a left-associative [`Expr::BinaryOp`]. The loop keeps recursion depth
    /// constant however long the chain is, so folds do not count toward
    /// [`crate::Options::max_depth`].
    ///
    /// # Parameters
    /// - `op`: The single operator recognized at this level.
    /// - `parse_operand`: Parser for the next tighter level.
    ///
    /// # Returns
    /// The operand alone, or a binary tree combining the operands.
    fn parse_binary_level(&mut self,
                          op: BinaryOperator,
                          parse_operand: impl Fn(&mut Self) -> ParseResult<Expr>)
                          -> ParseResult<Expr> {
        let operator = binary_operator_token(op);
        let mut left = parse_operand(self)?;

        while token_to_binary_operator(self.current().0) == Some(op) {
            self.consume(&operator)?;
            let right = parse_operand(self)?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// `-` maps to [`BinaryOperator::Sub`] even though no parser level accepts it.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a binary operator back to the token that spells it.
#[must_use]
pub const fn binary_operator_token(op: BinaryOperator) -> Token {
    match op {
        BinaryOperator::Add => Token::Plus,
        BinaryOperator::Sub => Token::Minus,
        BinaryOperator::Mul => Token::Star,
        BinaryOperator::Div => Token::Slash,
        BinaryOperator::Mod => Token::Percent,
    }
}
