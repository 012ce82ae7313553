//! The standard Filament lexeme table.

use fil_ir::TokenKind;
use fil_pattern::{PatternError, SharedPatternCache};

use crate::Lexer;

/// `(pattern, kind, priority)` for every Filament token.
///
/// Keywords sit one priority above the identifier pattern so they win when
/// the matched lengths tie.
pub const FILAMENT_LEXEMES: &[(&str, TokenKind, i32)] = &[
    ("@", TokenKind::At, 0),
    (":", TokenKind::Colon, 0),
    (":=", TokenKind::ColonEquals, 0),
    (",", TokenKind::Comma, 0),
    ("<", TokenKind::LessThan, 0),
    (">", TokenKind::GreaterThan, 0),
    (r"\(", TokenKind::LeftParen, 0),
    (")", TokenKind::RightParen, 0),
    (r"\[", TokenKind::LeftBracket, 0),
    ("]", TokenKind::RightBracket, 0),
    ("{", TokenKind::LeftBrace, 0),
    ("}", TokenKind::RightBrace, 0),
    (r"\+", TokenKind::Plus, 0),
    ("-", TokenKind::Minus, 0),
    (r"\*", TokenKind::Star, 0),
    ("/", TokenKind::Slash, 0),
    ("//", TokenKind::DoubleSlash, 0),
    (";", TokenKind::Semicolon, 0),
    (r"\.", TokenKind::Period, 0),
    ("->", TokenKind::RightArrow, 0),
    ("[0-9]+", TokenKind::Number, 0),
    ("[a-zA-Z_][a-zA-Z0-9'_]*", TokenKind::Identifier, 0),
    ("comp", TokenKind::KeywordComp, 1),
    ("new", TokenKind::KeywordNew, 1),
    ("interface", TokenKind::KeywordInterface, 1),
    ("extern", TokenKind::KeywordExtern, 1),
    ("where", TokenKind::KeywordWhere, 1),
];

/// A small component definition exercising most of the token set.
pub const SAMPLE_COMPONENT: &str = "comp Add<G>(); comp Mul<G>();\n\
comp Alu<G>(\n    @[G,G+1] op: 32,\n    @[G,G+1] l: 32,\n    @[G,G+1] r: 32\n) -> (\n    @[G,G+1] out: 32\n) {\n    A := new Add;\n    a0 := A<G+n>(l, r);\n}\n";

impl Lexer {
    /// A lexer loaded with [`FILAMENT_LEXEMES`].
    pub fn filament() -> Result<Lexer, PatternError> {
        Self::filament_with_cache(SharedPatternCache::new())
    }

    /// A lexer loaded with [`FILAMENT_LEXEMES`], compiling through `cache`.
    pub fn filament_with_cache(cache: SharedPatternCache) -> Result<Lexer, PatternError> {
        let mut lexer = Lexer::with_cache(cache);
        for &(pattern, kind, priority) in FILAMENT_LEXEMES {
            lexer.add(pattern, kind, priority)?;
        }
        Ok(lexer)
    }
}

#[cfg(test)]
mod tests;
