#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use super::*;

#[test]
fn table_covers_every_kind_once() {
    let kinds: HashSet<_> = FILAMENT_LEXEMES.iter().map(|&(_, kind, _)| kind).collect();
    assert_eq!(kinds.len(), FILAMENT_LEXEMES.len());
    assert_eq!(kinds.len(), TokenKind::ALL.len());
}

#[test]
fn keywords_outrank_identifiers() {
    let priority_of = |wanted: TokenKind| {
        FILAMENT_LEXEMES
            .iter()
            .find(|&&(_, kind, _)| kind == wanted)
            .map(|&(_, _, priority)| priority)
    };
    let ident = priority_of(TokenKind::Identifier);
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_keyword()) {
        assert!(priority_of(kind) > ident, "{kind}");
    }
}

#[test]
fn fixed_patterns_match_their_symbol() {
    let lexer = Lexer::filament().unwrap();
    for lexeme in lexer.lexemes() {
        let kind = lexeme.kind();
        if kind.carries_text() {
            continue;
        }
        let symbol = kind.symbol();
        let m = lexeme.match_prefix(symbol);
        assert_eq!(m.map(|m| m.len), Some(symbol.len()), "{kind}");
    }
}

#[test]
fn table_compiles_into_shared_cache() {
    let cache = SharedPatternCache::new();
    let lexer = Lexer::filament_with_cache(cache.clone()).unwrap();
    assert_eq!(lexer.lexemes().len(), FILAMENT_LEXEMES.len());
    assert_eq!(cache.len(), FILAMENT_LEXEMES.len());

    // A second table reuses every compiled pattern.
    Lexer::filament_with_cache(cache.clone()).unwrap();
    assert_eq!(cache.len(), FILAMENT_LEXEMES.len());
}
