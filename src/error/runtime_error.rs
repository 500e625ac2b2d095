use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Integers have arbitrary precision, so a zero divisor is the only way
/// evaluation can fail.
pub enum RuntimeError {
    /// Attempted to divide by zero.
    DivisionByZero {
        /// The dividend.
        dividend: BigInt,
    },
    /// Attempted to take a modulo by zero.
    ModuloByZero {
        /// The dividend.
        dividend: BigInt,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Runtime error: Division by zero in {dividend} / 0.")
            },
            Self::ModuloByZero { dividend } => {
                write!(f, "Runtime error: Modulo by zero in {dividend} % 0.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
