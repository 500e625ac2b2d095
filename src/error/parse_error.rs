use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Positions are byte offsets into the source; messages show them as 1-based
/// columns.
pub enum ParseError {
    /// Found a token that cannot start an operand.
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input where an operand was required.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A specific token was required but another one was found.
    ExpectedToken {
        /// The token the grammar required.
        expected: Token,
        /// The token actually found.
        found:    Token,
        /// Byte offset of the found token.
        position: usize,
    },
    /// Parentheses and negations nest deeper than allowed.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedToken { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = self.position() + 1;
        match self {
            Self::UnexpectedToken { token, .. } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { .. } => {
                write!(f, "Error at column {column}: Unexpected end of expression.")
            },

            Self::ExpectedToken { expected, found, .. } => {
                write!(f, "Error at column {column}: Expected {expected}, but got {found}.")
            },

            Self::NestingTooDeep { limit, .. } => write!(f,
                                                         "Error at column {column}: Expression nests deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
