//! Tokens and lexer output.

use fil_ir::{Span, TokenKind};

use crate::LexError;

/// A lexed token.
///
/// `text` borrows the matched slice for text-carrying kinds (identifiers,
/// numbers) and is empty for kinds whose value is fixed by the kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub text: &'src str,
    pub kind: TokenKind,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(text: &'src str, kind: TokenKind, span: Span) -> Self {
        Token { text, kind, span }
    }

    /// The text to print for this token: its own text, or the kind's symbol.
    #[inline]
    pub fn lexeme(&self) -> &'src str {
        if self.kind.carries_text() {
            self.text
        } else {
            self.kind.symbol()
        }
    }
}

/// Result of tokenizing a source string.
///
/// On a lexical error `tokens` holds everything lexed before the offending
/// character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub error: Option<LexError>,
}

impl<'src> LexOutput<'src> {
    /// Check if the whole source was tokenized.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Kinds of the lexed tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}
