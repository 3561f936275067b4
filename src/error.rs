//! Error taxonomy for LP file parsing.
//!
//! The core distinguishes one user-visible failure category — malformed
//! input — internally split into the four sub-kinds used by the pipeline
//! stages (lex, classify, structural, semantic). Every variant carries
//! enough context (byte offset, the offending token text where available)
//! to produce an actionable diagnostic.

use thiserror::Error;

/// Zero-based byte offset within the current line, plus the 1-based line
/// number the offset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// Byte offset within that line.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors produced while turning LP source text into a [`crate::model::Model`].
///
/// No partial model is ever returned alongside an error: parsing aborts at
/// the first failure, per the format's lack of recoverable partial-progress
/// semantics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LpError {
    /// An unrecognised leading byte with no viable number or identifier.
    #[error("lex error at {position}: unrecognised byte {byte:?}")]
    Lex {
        /// Location of the offending byte.
        position: Position,
        /// The byte that could not be classified.
        byte: char,
    },

    /// The raw-token sequence matched none of the classifier's patterns.
    #[error("classify error at {position}: {message}")]
    Classify {
        /// Location of the offending token.
        position: Position,
        /// Description of the mismatch.
        message: String,
    },

    /// Structural malformation: duplicate section header, non-empty `end`
    /// bucket, mismatched brackets, a missing `/2` trailer, or unexpected
    /// trailing tokens within a section.
    #[error("structural error at {position}: {message}")]
    Structural {
        /// Location of the offending token, if known.
        position: Position,
        /// Description of the structural problem.
        message: String,
    },

    /// Semantic malformation: a non-constant right-hand side, a strict
    /// `<`/`>` used where `<=`/`>=` is required, or a quadratic exponent
    /// other than 2.
    #[error("semantic error at {position}: {message}")]
    Semantic {
        /// Location of the offending token.
        position: Position,
        /// Description of the semantic problem.
        message: String,
    },

    /// The byte source could not be read.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O failure.
        message: String,
    },
}

impl LpError {
    #[must_use]
    pub fn lex(position: Position, byte: char) -> Self {
        Self::Lex { position, byte }
    }

    #[must_use]
    pub fn classify(position: Position, message: impl Into<String>) -> Self {
        Self::Classify { position, message: message.into() }
    }

    #[must_use]
    pub fn structural(position: Position, message: impl Into<String>) -> Self {
        Self::Structural { position, message: message.into() }
    }

    #[must_use]
    pub fn semantic(position: Position, message: impl Into<String>) -> Self {
        Self::Semantic { position, message: message.into() }
    }

    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io { message: message.into() }
    }
}

impl From<std::io::Error> for LpError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type alias used throughout the crate.
pub type LpResult<T> = Result<T, LpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_message() {
        let err = LpError::lex(Position { line: 3, column: 5 }, '#');
        assert_eq!(err.to_string(), "lex error at line 3, column 5: unrecognised byte '#'");
    }

    #[test]
    fn io_error_roundtrip() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let lp_err: LpError = io_err.into();
        assert!(matches!(lp_err, LpError::Io { .. }));
    }
}
