use std::fmt;

/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a tree:
/// unexpected tokens, a missing closing parenthesis and nesting that exceeds
/// the configured limit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the arithmetic faults raised during evaluation: division or modulo
/// by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any fault that stops an expression from producing a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression could not be parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
