//! Canonical rendering and the debug token listing.

use fil_ir::TokenKind;

use crate::Token;

/// Render tokens as compact, single-line source.
///
/// Each token prints its text (identifiers, numbers) or its kind's symbol.
/// A space follows separators and keywords, and any token that would
/// otherwise fuse with the next one (`m0 out`, not `m0out`). Lexing the
/// result and rendering again gives back the same string.
pub fn render(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        out.push_str(token.lexeme());

        let next = tokens.get(i + 1).map(|next| next.kind);
        if token.kind.spaced() || next.is_some_and(|next| fuses(token.kind, next)) {
            out.push(' ');
        }
    }

    out
}

/// Whether printing `next` right after `current` would lex differently.
fn fuses(current: TokenKind, next: TokenKind) -> bool {
    let word = |kind: TokenKind| kind.carries_text() || kind.is_keyword();

    match current {
        _ if current.carries_text() => word(next),
        TokenKind::Minus => next == TokenKind::GreaterThan,
        TokenKind::Slash => matches!(next, TokenKind::Slash | TokenKind::DoubleSlash),
        _ => false,
    }
}

/// Debug listing of a token stream.
///
/// Text-carrying tokens show as `<'text', Kind>`, the rest as `<Kind>`.
pub fn describe(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| {
            if token.kind.carries_text() {
                format!("<'{}', {}>", token.text, token.kind)
            } else {
                format!("<{}>", token.kind)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
