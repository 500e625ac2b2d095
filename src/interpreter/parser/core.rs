use std::mem;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        options::{Options, Recovery},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Stands in for the current token once the cursor has run off the end of a
/// sequence that was not terminated by [`Token::Eof`].
static END: Token = Token::Eof;

/// A recursive-descent parser over a token sequence.
///
/// The parser keeps a single forward cursor and looks at one token at a time.
/// The cursor only moves through [`Parser::consume`].
///
/// Grammar, loosest level first:
/// ```text
///     expression     := addition
///     addition       := multiplication ("+" multiplication)*
///     multiplication := division ("*" division)*
///     division       := modulo ("/" modulo)*
///     modulo         := negation ("%" negation)*
///     negation       := "-" negation | atom
///     atom           := "(" expression ")" | integer
/// ```
pub struct Parser<'a> {
    tokens:  &'a [(Token, usize)],
    cursor:  usize,
    end:     usize,
    depth:   usize,
    options: Options,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned on the first token.
    ///
    /// `tokens` normally comes from [`tokenize`](crate::tokenize) and ends with
    /// [`Token::Eof`]. A slice without that marker is accepted too: once the
    /// cursor runs off the end the parser sees end of input at the offset of
    /// the last token.
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)], options: Options) -> Self {
        let end = tokens.last().map_or(0, |(_, position)| *position);
        Self { tokens,
               cursor: 0,
               end,
               depth: 0,
               options }
    }

    /// Parses the whole token sequence into a single tree.
    ///
    /// After the expression the parser consumes the end-of-input marker. In
    /// strict mode anything left over is an error; in lenient mode it is
    /// logged and ignored.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the tokens do not form an expression, or if
    /// nesting exceeds [`Options::max_depth`].
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{lexer::tokenize, options::Options, parser::Parser};
    ///
    /// let tokens = tokenize("2*3/4");
    /// let tree = Parser::new(&tokens, Options::default()).parse().unwrap();
    /// assert_eq!(tree.to_string(), "(2 * (3 / 4))");
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        self.consume(&Token::Eof)?;
        tracing::debug!(tree = %expr, "parsed expression");
        Ok(expr)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing, used at the top level
    /// and inside parentheses. It starts at the loosest level, addition.
    ///
    /// Grammar: `expression := addition`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_addition()
    }

    /// Returns the token under the cursor and its byte offset.
    pub(in crate::interpreter::parser) fn current(&self) -> (&'a Token, usize) {
        match self.tokens.get(self.cursor) {
            Some((token, position)) => (token, *position),
            None => (&END, self.end),
        }
    }

    /// Advances past the current token if it has the same kind as `expected`.
    ///
    /// On a mismatch the cursor stays where it is. With
    /// [`Recovery::Strict`] that is an error; with [`Recovery::Lenient`] it is
    /// logged and parsing continues from the same token.
    ///
    /// # Errors
    /// `ParseError::ExpectedToken` on a mismatch in strict mode.
    pub(in crate::interpreter::parser) fn consume(&mut self, expected: &Token) -> ParseResult<()> {
        let (found, position) = self.current();

        if mem::discriminant(found) == mem::discriminant(expected) {
            if self.cursor < self.tokens.len() {
                self.cursor += 1;
            }
            return Ok(());
        }

        match self.options.recovery {
            Recovery::Strict => Err(ParseError::ExpectedToken { expected: expected.clone(),
                                                                found: found.clone(),
                                                                position }),
            Recovery::Lenient => {
                tracing::warn!(%expected, %found, position, "token mismatch, continuing");
                Ok(())
            },
        }
    }

    /// Enters one more level of nesting.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` once the depth passes the configured limit.
    pub(in crate::interpreter::parser) fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.options.max_depth,
                                                    position: self.current().1, });
        }
        Ok(())
    }

    /// Leaves a level of nesting entered with [`Parser::enter`].
    pub(in crate::interpreter::parser) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
