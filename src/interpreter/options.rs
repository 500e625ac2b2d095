/// Default limit for [`Options::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// What the parser does when a required token is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Abort the parse with [`crate::error::ParseError::ExpectedToken`].
    #[default]
    Strict,
    /// Log a warning and keep parsing from the same token. Trailing input and
    /// an unclosed `(` are then ignored rather than reported.
    Lenient,
}

/// Parser configuration.
///
/// ## Usage
///
/// `Options::default()` is strict and allows [`DEFAULT_MAX_DEPTH`] levels of
/// nesting. The command line fills one in from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Mismatch policy for `consume`.
    pub recovery:  Recovery,
    /// Maximum nesting of parentheses and negations. Operator chains of any
    /// length do not nest.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { recovery:  Recovery::default(),
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl Options {
    /// Returns a copy with lenient mismatch recovery.
    #[must_use]
    pub const fn lenient(self) -> Self {
        Self { recovery: Recovery::Lenient,
               ..self }
    }

    /// Returns a copy with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}
