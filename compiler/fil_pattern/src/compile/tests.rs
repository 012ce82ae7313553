#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use crate::{Node, Pattern, PatternError, Role};

fn compile(text: &str) -> Pattern {
    match Pattern::compile(text) {
        Ok(pattern) => pattern,
        Err(e) => panic!("`{text}` failed to compile: {e}"),
    }
}

fn roles(pattern: &Pattern) -> Vec<Role> {
    pattern.nodes().iter().map(Node::role).collect()
}

// === Atoms ===

#[test]
fn literals_become_one_node_each() {
    let pattern = compile("abc");
    assert_eq!(pattern.len(), 3);
    assert!(!pattern.is_anchored());
    assert_eq!(pattern.nodes()[1], Node::literal('b'));
}

#[test]
fn empty_pattern_has_no_nodes() {
    let pattern = compile("");
    assert!(pattern.is_empty());
}

#[test]
fn escape_disables_special_meaning() {
    let pattern = compile(r"\(\[\+\*\.\^");
    let expected: Vec<Node> = "([+*.^".chars().map(Node::literal).collect();
    assert_eq!(pattern.nodes(), expected.as_slice());
}

#[test]
fn dot_is_printable_ascii() {
    let pattern = compile(".");
    assert_eq!(pattern.nodes(), &[Node::range(' ', '~')]);
}

#[test]
fn leading_caret_anchors() {
    let pattern = compile("^ab");
    assert!(pattern.is_anchored());
    assert_eq!(pattern.len(), 2);
}

#[test]
fn caret_elsewhere_is_literal() {
    let pattern = compile("a^");
    assert!(!pattern.is_anchored());
    assert_eq!(pattern.nodes()[1], Node::literal('^'));
}

#[test]
fn escaped_leading_caret_is_literal() {
    let pattern = compile(r"\^a");
    assert!(!pattern.is_anchored());
    assert_eq!(pattern.nodes()[0], Node::literal('^'));
}

// === Classes ===

#[test]
fn class_unions_singles_and_ranges() {
    let pattern = compile("[a-zA-Z_']");
    let node = &pattern.nodes()[0];
    assert_eq!(node.ranges(), &[('a', 'z'), ('A', 'Z'), ('_', '_'), ('\'', '\'')]);
    assert!(!node.is_negated());
}

#[test]
fn negated_class() {
    let pattern = compile("[^0-9]");
    let node = &pattern.nodes()[0];
    assert!(node.is_negated());
    assert_eq!(node.ranges(), &[('0', '9')]);
}

#[test]
fn trailing_dash_in_class_is_literal() {
    let pattern = compile("[a-]");
    assert_eq!(pattern.nodes()[0].ranges(), &[('a', 'a'), ('-', '-')]);
}

#[test]
fn class_specials_are_plain_inside() {
    let pattern = compile("[*+(.]");
    assert_eq!(
        pattern.nodes()[0].ranges(),
        &[('*', '*'), ('+', '+'), ('(', '('), ('.', '.')]
    );
}

// === Quantifiers ===

#[test]
fn star_marks_previous_node() {
    let pattern = compile("ab*");
    assert_eq!(roles(&pattern), vec![Role::Step, Role::Repeat]);
}

#[test]
fn plus_duplicates_previous_node() {
    let pattern = compile("[0-9]+");
    assert_eq!(roles(&pattern), vec![Role::Step, Role::Repeat]);
    assert_eq!(pattern.nodes()[0].ranges(), pattern.nodes()[1].ranges());
}

#[test]
fn identifier_pattern_shape() {
    let pattern = compile("[a-zA-Z_][a-zA-Z0-9'_]*");
    assert_eq!(roles(&pattern), vec![Role::Step, Role::Repeat]);
}

// === Capture group ===

#[test]
fn group_becomes_zero_width_markers() {
    let pattern = compile("^(comp)[^a-zA-Z0-9_]");
    assert!(pattern.is_anchored());
    assert!(pattern.has_capture());
    assert_eq!(
        roles(&pattern),
        vec![
            Role::CaptureStart,
            Role::Step,
            Role::Step,
            Role::Step,
            Role::Step,
            Role::CaptureStop,
            Role::Step,
        ]
    );
}

#[test]
fn close_paren_without_group_is_literal() {
    let pattern = compile(")");
    assert!(!pattern.has_capture());
    assert_eq!(pattern.nodes(), &[Node::literal(')')]);
}


// === Errors ===

#[test]
fn dangling_star() {
    assert_eq!(
        Pattern::compile("*a"),
        Err(PatternError::DanglingQuantifier {
            pos: 0,
            quantifier: '*',
        })
    );
}

#[test]
fn dangling_plus_after_anchor() {
    assert_eq!(
        Pattern::compile("^+"),
        Err(PatternError::DanglingQuantifier {
            pos: 1,
            quantifier: '+',
        })
    );
}

#[test]
fn quantifier_after_capture_marker() {
    assert_eq!(
        Pattern::compile("(*a)"),
        Err(PatternError::DanglingQuantifier {
            pos: 1,
            quantifier: '*',
        })
    );
}

#[test]
fn unterminated_class_is_bounded() {
    assert_eq!(
        Pattern::compile("ab[cd"),
        Err(PatternError::UnterminatedClass { pos: 2 })
    );
    assert_eq!(
        Pattern::compile("["),
        Err(PatternError::UnterminatedClass { pos: 0 })
    );
    assert_eq!(
        Pattern::compile("[a-"),
        Err(PatternError::UnterminatedClass { pos: 0 })
    );
}

#[test]
fn empty_class() {
    assert_eq!(Pattern::compile("[]"), Err(PatternError::EmptyClass { pos: 0 }));
    assert_eq!(Pattern::compile("x[^]"), Err(PatternError::EmptyClass { pos: 1 }));
}

#[test]
fn reversed_range() {
    assert_eq!(
        Pattern::compile("[z-a]"),
        Err(PatternError::InvalidRange {
            pos: 1,
            low: 'z',
            high: 'a'
        })
    );
}

#[test]
fn second_group_is_rejected() {
    assert_eq!(
        Pattern::compile("(a)(b)"),
        Err(PatternError::NestedGroup { pos: 3 })
    );
    assert_eq!(
        Pattern::compile("((a))"),
        Err(PatternError::NestedGroup { pos: 1 })
    );
}

#[test]
fn close_paren_after_group_is_rejected() {
    assert_eq!(
        Pattern::compile("(a))"),
        Err(PatternError::StrayGroupClose { pos: 3 })
    );
    assert_eq!(
        Pattern::compile("(a)b)"),
        Err(PatternError::StrayGroupClose { pos: 4 })
    );
    assert_eq!(
        Pattern::compile(r"(a)b\)"),
        Ok(Pattern {
            nodes: vec![
                Node::capture_start(),
                Node::literal('a'),
                Node::capture_stop(),
                Node::literal('b'),
                Node::literal(')'),
            ],
            anchored: false,
        })
    );
}

#[test]
fn unterminated_group() {
    assert_eq!(
        Pattern::compile("ab(cd"),
        Err(PatternError::UnterminatedGroup { pos: 2 })
    );
}

#[test]
fn trailing_escape() {
    assert_eq!(
        Pattern::compile(r"ab\"),
        Err(PatternError::TrailingEscape { pos: 2 })
    );
}

#[test]
fn error_reports_position() {
    let err = Pattern::compile("abc[").unwrap_err();
    assert_eq!(err.pos(), 3);
    assert_eq!(err.to_string(), "character class opened at offset 3 is never closed");
}
