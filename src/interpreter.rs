/// The evaluator module computes the value of a parsed tree.
///
/// Evaluation is a single recursive walk over the AST: children first, then
/// the parent, with operator chains walked in a loop. Division or modulo by
/// zero is reported as a runtime error.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw expression and produces `(token, offset)` pairs:
/// integers, the five arithmetic operators, parentheses, unknown input and a
/// final end-of-input marker. It never fails.
pub mod lexer;
/// Parser configuration shared by the library and the command line.
pub mod options;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// It is a recursive-descent parser with one procedure per grammar rule.
/// Operator precedence comes from how those procedures call each other.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Reports syntax errors with their position in the source.
/// - Bounds recursion depth on pathological input.
pub mod parser;
