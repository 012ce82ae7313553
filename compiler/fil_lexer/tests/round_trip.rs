//! Property-based round-trip tests for the canonical renderer.
//!
//! For any tokenizable source `s`:
//! render(lex(render(lex(s)))) == render(lex(s))

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use fil_lexer::{render, Lexer, TokenKind};
use proptest::prelude::*;

/// A single source fragment that lexes on its own.
fn fragment_strategy() -> impl Strategy<Value = String> {
    let symbols: Vec<String> = TokenKind::ALL
        .into_iter()
        .filter(|kind| !kind.carries_text())
        .map(|kind| kind.symbol().to_owned())
        .collect();

    prop_oneof![
        3 => prop::sample::select(symbols),
        2 => prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9'_]{0,5}").expect("valid regex"),
        1 => prop::string::string_regex("[0-9]{1,3}").expect("valid regex"),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "", " ", "\t", "\n", "  "])
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((fragment_strategy(), separator_strategy()), 0..24).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, sep)| format!("{fragment}{sep}"))
            .collect()
    })
}

proptest! {
    #[test]
    fn render_is_a_fixed_point(source in source_strategy()) {
        let lexer = Lexer::filament().unwrap();

        let first = lexer.tokenize(&source);
        prop_assert!(first.is_ok(), "{:?}: {:?}", source, first.error);
        let once = render(&first.tokens);

        let second = lexer.tokenize(&once);
        prop_assert!(second.is_ok(), "{:?}: {:?}", once, second.error);
        prop_assert_eq!(first.kinds(), second.kinds());
        prop_assert_eq!(render(&second.tokens), once);
    }

    #[test]
    fn whitespace_does_not_change_kinds(source in source_strategy()) {
        let lexer = Lexer::filament().unwrap();
        let spaced: String = source.replace(' ', "  \t");
        prop_assert_eq!(lexer.tokenize(&source).kinds(), lexer.tokenize(&spaced).kinds());
    }
}
