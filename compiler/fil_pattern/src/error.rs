//! Pattern compilation errors.

use thiserror::Error;

/// A malformed pattern.
///
/// `pos` is the byte offset in the pattern text where the problem was
/// detected (for unterminated constructs, the offset of the opener).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum PatternError {
    #[error("quantifier `{quantifier}` at offset {pos} has nothing to repeat")]
    DanglingQuantifier { pos: usize, quantifier: char },

    #[error("character class opened at offset {pos} is never closed")]
    UnterminatedClass { pos: usize },

    #[error("character class at offset {pos} is empty")]
    EmptyClass { pos: usize },

    #[error("range `{low}-{high}` at offset {pos} is reversed")]
    InvalidRange { pos: usize, low: char, high: char },

    #[error("second group at offset {pos}: only one capture group is supported")]
    NestedGroup { pos: usize },

    #[error("group opened at offset {pos} is never closed")]
    UnterminatedGroup { pos: usize },

    #[error("`)` at offset {pos} follows an already closed group")]
    StrayGroupClose { pos: usize },

    #[error("pattern ends with a lone `\\` at offset {pos}")]
    TrailingEscape { pos: usize },
}

impl PatternError {
    /// Byte offset in the pattern text the error points at.
    pub fn pos(&self) -> usize {
        match self {
            Self::DanglingQuantifier { pos, .. }
            | Self::UnterminatedClass { pos }
            | Self::EmptyClass { pos }
            | Self::InvalidRange { pos, .. }
            | Self::NestedGroup { pos }
            | Self::UnterminatedGroup { pos }
            | Self::StrayGroupClose { pos }
            | Self::TrailingEscape { pos } => *pos,
        }
    }
}
