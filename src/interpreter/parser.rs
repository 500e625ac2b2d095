/// Parser state, the entry point and token consumption.
pub mod core;

/// The four binary precedence levels.
///
/// Addition, multiplication, division and modulo, loosest to tightest. Each
/// level recognizes exactly one operator.
pub mod binary;

/// Negation and atoms.
///
/// Handles prefix `-`, integer literals and parenthesized groups.
pub mod unary;

pub use self::core::{ParseResult, Parser};
