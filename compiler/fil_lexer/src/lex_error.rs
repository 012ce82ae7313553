//! Lexical errors.

use fil_ir::Span;
use thiserror::Error;

/// No lexeme matches at `offset`.
///
/// `offset` is a byte offset into the source; `found` is the character
/// starting there.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("unexpected character `{}` at byte offset {offset}", found.escape_debug())]
pub struct LexError {
    pub offset: usize,
    pub found: char,
}

impl LexError {
    pub const fn new(offset: usize, found: char) -> Self {
        LexError { offset, found }
    }

    /// Span covering the offending character.
    pub const fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.found.len_utf8())
    }
}
