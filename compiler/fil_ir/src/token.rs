//! Token kinds and their static metadata table.
//!
//! Every kind carries three pieces of read-only metadata used by the lexer's
//! printers:
//! - `name()`: debug name, as shown by the token listing
//! - `symbol()`: canonical display symbol for fixed-symbol kinds
//! - `spaced()`: whether the canonical renderer emits a trailing space
//!
//! `Number` and `Identifier` are the only text-carrying kinds; their value
//! lives in the token text, not in the kind.

use std::fmt;

/// Token kind for the Filament surface syntax.
///
/// Closed set consumed by the (future) parser. Kinds that carry no payload
/// are fully described by this tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Punctuation / operators ===
    At,           // @
    Colon,        // :
    ColonEquals,  // :=
    Comma,        // ,
    LessThan,     // <
    GreaterThan,  // >
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    LeftBrace,    // {
    RightBrace,   // }
    Plus,         // +
    Minus,        // -
    Star,         // *
    Slash,        // /
    DoubleSlash,  // //
    Semicolon,    // ;
    Period,       // .
    RightArrow,   // ->

    // === Text-carrying ===
    Number,     // [0-9]+
    Identifier, // [a-zA-Z_][a-zA-Z0-9'_]*

    // === Keywords ===
    KeywordComp,      // comp
    KeywordNew,       // new
    KeywordInterface, // interface
    KeywordExtern,    // extern
    KeywordWhere,     // where
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 27] = [
        TokenKind::At,
        TokenKind::Colon,
        TokenKind::ColonEquals,
        TokenKind::Comma,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::DoubleSlash,
        TokenKind::Semicolon,
        TokenKind::Period,
        TokenKind::RightArrow,
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::KeywordComp,
        TokenKind::KeywordNew,
        TokenKind::KeywordInterface,
        TokenKind::KeywordExtern,
        TokenKind::KeywordWhere,
    ];

    /// Debug name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::At => "At",
            Self::Colon => "Colon",
            Self::ColonEquals => "ColonEquals",
            Self::Comma => "Comma",
            Self::LessThan => "LessThan",
            Self::GreaterThan => "GreaterThan",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::LeftBracket => "LeftBracket",
            Self::RightBracket => "RightBracket",
            Self::LeftBrace => "LeftBrace",
            Self::RightBrace => "RightBrace",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::DoubleSlash => "DoubleSlash",
            Self::Semicolon => "Semicolon",
            Self::Period => "Period",
            Self::RightArrow => "RightArrow",
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::KeywordComp => "KeywordComp",
            Self::KeywordNew => "KeywordNew",
            Self::KeywordInterface => "KeywordInterface",
            Self::KeywordExtern => "KeywordExtern",
            Self::KeywordWhere => "KeywordWhere",
        }
    }

    /// Canonical display symbol.
    ///
    /// Text-carrying kinds have no fixed symbol and return `"?"`; render
    /// their token text instead.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::At => "@",
            Self::Colon => ":",
            Self::ColonEquals => ":=",
            Self::Comma => ",",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Semicolon => ";",
            Self::Period => ".",
            Self::RightArrow => "->",
            Self::Number | Self::Identifier => "?",
            Self::KeywordComp => "comp",
            Self::KeywordNew => "new",
            Self::KeywordInterface => "interface",
            Self::KeywordExtern => "extern",
            Self::KeywordWhere => "where",
        }
    }

    /// Whether the canonical renderer follows this kind with a space.
    ///
    /// Separators and keywords are spaced.
    pub const fn spaced(self) -> bool {
        matches!(
            self,
            Self::DoubleSlash
                | Self::Colon
                | Self::Comma
                | Self::Semicolon
                | Self::LeftBrace
                | Self::RightBracket
        ) || self.is_keyword()
    }

    /// Whether tokens of this kind carry their matched text.
    #[inline]
    pub const fn carries_text(self) -> bool {
        matches!(self, Self::Number | Self::Identifier)
    }

    /// Check if this is a reserved keyword.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KeywordComp
                | Self::KeywordNew
                | Self::KeywordInterface
                | Self::KeywordExtern
                | Self::KeywordWhere
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
