use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a negation.
    ///
    /// Negation is right-associative and may repeat, so `---5` becomes three
    /// nested [`Expr::Negate`] nodes.
    ///
    /// Grammar:
    /// ```text
    ///     negation := "-" negation
    ///               | atom
    /// ```
    pub(crate) fn parse_negation(&mut self) -> ParseResult<Expr> {
        if !matches!(self.current().0, Token::Minus) {
            return self.parse_atom();
        }

        self.consume(&Token::Minus)?;
        self.enter()?;
        let expr = self.parse_negation()?;
        self.leave();
        Ok(Expr::negate(expr))
    }

    /// Parses an atom: an integer literal or a parenthesized expression.
    ///
    /// Anything else here is fatal regardless of the recovery mode.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input ends where an operand is needed.
    /// - `UnexpectedToken` for any other token.
    pub(crate) fn parse_atom(&mut self) -> ParseResult<Expr> {
        let (token, position) = self.current();

        match token {
            Token::Integer(value) => {
                self.consume(token)?;
                Ok(Expr::literal(value.clone()))
            },
            Token::LParen => self.parse_grouping(),
            Token::Eof => Err(ParseError::UnexpectedEndOfInput { position }),
            _ => Err(ParseError::UnexpectedToken { token: token.clone(),
                                                   position }),
        }
    }

    /// Parses a parenthesized expression into an [`Expr::Group`].
    ///
    /// Grammar: `grouping := "(" expression ")"`
    ///
    /// A missing `)` goes through [`Parser::consume`], so it is an error only
    /// in strict mode.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.consume(&Token::LParen)?;
        self.enter()?;
        let expr = self.parse_expression()?;
        self.consume(&Token::RParen)?;
        self.leave();
        Ok(Expr::group(expr))
    }
}
