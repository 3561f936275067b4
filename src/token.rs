//! Raw and processed token tag sets (spec §3, §9 "Polymorphic tokens").
//!
//! Both token kinds are closed variant sets expressed as tagged enums, not
//! an inheritance hierarchy, so the classifier and section processors get
//! exhaustive-match checking at compile time.

use crate::error::Position;
use crate::model::{ComparisonOp, Sense};

/// A token paired with the position of its first byte, threaded through
/// every pipeline stage so error messages can always point at source text.
pub type Spanned<T> = (Position, T);

/// A kind of LP file section, as recognised by a `SECTION_HEADER` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Objective,
    Constraints,
    Bounds,
    General,
    Binary,
    SemiContinuous,
    Sos,
    End,
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Objective => write!(f, "objective"),
            Self::Constraints => write!(f, "constraints"),
            Self::Bounds => write!(f, "bounds"),
            Self::General => write!(f, "general"),
            Self::Binary => write!(f, "binary"),
            Self::SemiContinuous => write!(f, "semi-continuous"),
            Self::Sos => write!(f, "sos"),
            Self::End => write!(f, "end"),
        }
    }
}

/// A token emitted by the lexer (spec §3 "Raw token"). Immutable after
/// emission; consumed by the classifier and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum RawToken {
    String(String),
    Number(f64),
    Less,
    Greater,
    Equal,
    Colon,
    LineEnd,
    FileEnd,
    BracketOpen,
    BracketClose,
    Plus,
    Minus,
    Caret,
    Slash,
    Asterisk,
}

/// A token emitted by the classifier (spec §3 "Processed token"). Moved
/// into section buckets by the splitter and drained by section processors.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessedToken {
    SectionHeader { kind: SectionKind, sense: Option<Sense> },
    ConstraintLabel(String),
    VariableId(String),
    Constant(f64),
    Comparison(ComparisonOp),
    BracketOpen,
    BracketClose,
    Free,
    Slash,
    Asterisk,
    Caret,
    SosType(u8),
}
