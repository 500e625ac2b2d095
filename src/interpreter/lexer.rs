use std::fmt;

use logos::Logos;
use num_bigint::BigInt;

/// Reasons the lexer can fail to classify a piece of input.
///
/// These never abort tokenization. The offending text is kept in a
/// [`Token::Unknown`] and reported once the parser reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    UnrecognizedCharacter,
}

/// Input the lexer could not classify, kept for diagnostics.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Unrecognized {
    /// The raw text that was rejected.
    pub lexeme: String,
    /// Why it was rejected.
    pub reason: LexError,
}

impl Unrecognized {
    /// Builds an unrecognized lexeme.
    #[must_use]
    pub fn new(lexeme: impl Into<String>, reason: LexError) -> Self {
        Self { lexeme: lexeme.into(),
               reason }
    }
}

/// Represents a lexical token in the source input.
///
/// Only `Integer` carries a value. `Unknown` and `Eof` are never matched by a
/// pattern; [`tokenize`] inserts them.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Any number of digits is allowed.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Input the lexer could not classify.
    Unknown(Unrecognized),
    /// End of input. Always the last token of a sequence.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Unknown(unrecognized) => write!(f, "unknown '{}'", unrecognized.lexeme),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    BigInt::parse_bytes(lex.slice().as_bytes(), 10)
}

/// Converts source text into a sequence of `(token, byte offset)` pairs.
///
/// Whitespace is skipped. Anything that is not an operator, a parenthesis or
/// a run of decimal digits becomes a [`Token::Unknown`]. The sequence always
/// ends with exactly one [`Token::Eof`] positioned at `source.len()`, so this
/// function cannot fail.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 + (3)");
/// let kinds: Vec<_> = tokens.into_iter().map(|(tok, _)| tok).collect();
/// assert_eq!(kinds,
///            vec![Token::Integer(12.into()),
///                 Token::Plus,
///                 Token::LParen,
///                 Token::Integer(3.into()),
///                 Token::RParen,
///                 Token::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let offset = lexer.span().start;
        let token =
            result.unwrap_or_else(|reason| Token::Unknown(Unrecognized::new(lexer.slice(), reason)));
        tracing::trace!(%token, offset, "scanned token");
        tokens.push((token, offset));
    }

    tokens.push((Token::Eof, source.len()));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn single_character_operators() {
        assert_eq!(kinds("+-*/%()"),
                   vec![Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::Percent,
                        Token::LParen,
                        Token::RParen,
                        Token::Eof]);
    }

    #[test]
    fn digit_runs_become_one_integer() {
        assert_eq!(kinds("1234"), vec![Token::Integer(1234.into()), Token::Eof]);
        assert_eq!(kinds("007"), vec![Token::Integer(7.into()), Token::Eof]);
    }

    #[test]
    fn whitespace_is_skipped_and_offsets_are_kept() {
        let tokens = tokenize(" 1 \t+\n 22 ");
        assert_eq!(tokens,
                   vec![(Token::Integer(1.into()), 1),
                        (Token::Plus, 4),
                        (Token::Integer(22.into()), 7),
                        (Token::Eof, 10)]);
    }

    #[test]
    fn empty_input_is_only_eof() {
        assert_eq!(tokenize(""), vec![(Token::Eof, 0)]);
        assert_eq!(kinds("   "), vec![Token::Eof]);
    }

    #[test]
    fn decimal_point_never_extends_a_number() {
        assert_eq!(kinds("1.5"),
                   vec![Token::Integer(1.into()),
                        Token::Unknown(Unrecognized::new(".", LexError::UnrecognizedCharacter)),
                        Token::Integer(5.into()),
                        Token::Eof]);
    }

    #[test]
    fn unknown_character_does_not_stop_scanning() {
        assert_eq!(kinds("@ 3"),
                   vec![Token::Unknown(Unrecognized::new("@", LexError::UnrecognizedCharacter)),
                        Token::Integer(3.into()),
                        Token::Eof]);
    }

    #[test]
    fn long_digit_runs_keep_every_digit() {
        let digits = "123456789012345678901234567890";
        let expected: BigInt = digits.parse().unwrap();
        assert_eq!(kinds(digits), vec![Token::Integer(expected), Token::Eof]);
    }

    #[test]
    fn minus_is_never_part_of_a_literal() {
        assert_eq!(kinds("-5"), vec![Token::Minus, Token::Integer(5.into()), Token::Eof]);
    }
}
