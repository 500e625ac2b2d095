//! # reckon
//!
//! reckon evaluates integer arithmetic expressions such as `(1+2)*3` or
//! `--5 % 3`. Text is scanned into tokens, parsed by a hand-written
//! recursive-descent parser and the resulting tree is evaluated to an
//! arbitrary-precision [`BigInt`], so no literal or result is ever too large.
//!
//! The grammar gives `*`, `/` and `%` three separate precedence levels and has
//! no binary `-`; see [`interpreter::parser::Parser`] for the exact rules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::parser::Parser;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` tags. The
/// tree is built by the parser and evaluated bottom-up.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for syntax faults and `RuntimeError` for arithmetic
///   faults.
/// - Attaches source positions to parse errors.
/// - Wraps both in a single `Error` for callers of [`evaluate`].
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// # Responsibilities
/// - Tokenizes input with the lexer.
/// - Builds the tree with the recursive-descent parser.
/// - Evaluates the tree.
pub mod interpreter;
pub use num_bigint::BigInt;

pub use crate::{
    error::Error,
    interpreter::{
        lexer::tokenize,
        options::{Options, Recovery},
    },
};

/// Parses source text into an expression tree.
///
/// # Errors
/// Returns [`Error::Parse`] if the text is not a valid expression.
///
/// # Example
/// ```
/// use reckon::{Options, parse};
///
/// let tree = parse("-(1+2)", &Options::default()).unwrap();
/// assert_eq!(tree.to_string(), "-(1 + 2)");
/// ```
pub fn parse(source: &str, options: &Options) -> Result<ast::Expr, Error> {
    let tokens = tokenize(source);
    Ok(Parser::new(&tokens, *options).parse()?)
}

/// Evaluates source text and returns its integer value.
///
/// This function tokenizes, parses and evaluates the expression in one call.
/// Any parse or runtime fault aborts the computation; no partial result is
/// produced.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed input and [`Error::Runtime`] for
/// division or modulo by zero.
///
/// # Examples
/// ```
/// use reckon::{BigInt, Options, evaluate};
///
/// assert_eq!(evaluate("(1 + 2) * 3", &Options::default()).unwrap(), BigInt::from(9));
///
/// // `*` is looser than `/`, so this is 2 * (3 / 4).
/// assert_eq!(evaluate("2*3/4", &Options::default()).unwrap(), BigInt::from(0));
///
/// // Results are not limited to 64 bits.
/// assert_eq!(evaluate("9223372036854775807 + 1", &Options::default()).unwrap().to_string(),
///            "9223372036854775808");
///
/// // Division by zero is an error.
/// assert!(evaluate("1/0", &Options::default()).is_err());
/// ```
pub fn evaluate(source: &str, options: &Options) -> Result<BigInt, Error> {
    let expr = parse(source, options)?;
    let value = expr.eval()?;
    tracing::debug!(%value, "evaluated expression");
    Ok(value)
}
