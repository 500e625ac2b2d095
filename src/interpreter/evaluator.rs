/// Tree walk and result type.
pub mod core;

/// Binary operator evaluation with floor semantics and zero-divisor checks.
pub mod binary;

/// Unary negation.
pub mod unary;

pub use self::core::EvalResult;
