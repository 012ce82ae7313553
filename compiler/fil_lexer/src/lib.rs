//! Lexer for Filament.
//!
//! A [`Lexer`] owns a table of lexemes: compiled patterns bound to a
//! [`TokenKind`] and a priority. Tokenizing scans left to right, skipping
//! whitespace; at each offset every lexeme is tried against the rest of the
//! input and the longest match wins, ties going to the higher priority. That
//! is how `->` beats `-` and how `new` beats the identifier pattern.
//!
//! Lexing never throws tokens away: on an unmatched character the
//! [`LexOutput`] carries the tokens produced so far together with the
//! [`LexError`].
//!
//! [`render`] turns a token stream back into compact, single-line source
//! that lexes to the same tokens.

mod filament;
mod lex_error;
mod lexer;
mod render;
mod token;

pub use fil_ir::{Span, TokenKind};
pub use fil_pattern::{PatternError, SharedPatternCache};
pub use filament::{FILAMENT_LEXEMES, SAMPLE_COMPONENT};
pub use lex_error::LexError;
pub use lexer::{Lexeme, Lexer};
pub use render::{describe, render};
pub use token::{LexOutput, Token};

/// Tokenize `source` with the standard Filament lexeme table.
pub fn lex(source: &str) -> Result<LexOutput<'_>, PatternError> {
    Ok(Lexer::filament()?.tokenize(source))
}
