//! Single-pass pattern compiler.
//!
//! Walks the pattern text once, left to right. The only structure beyond
//! "one node per atom" is that a quantifier rewrites the node just before
//! it, and that the first `(` / matching `)` pair becomes the capture
//! markers.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::{Node, Pattern, PatternError};

/// Capture group state while scanning.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Group {
    /// No `(` seen yet.
    None,
    /// `(` seen at this byte offset, `)` still pending.
    Open(usize),
    /// The group has been closed; no further groups allowed.
    Closed,
}

impl Pattern {
    /// Compile a pattern string.
    ///
    /// See the crate docs for the grammar. Prefer
    /// [`PatternCache::get_or_compile`](crate::PatternCache::get_or_compile)
    /// when the same text is compiled repeatedly.
    pub fn compile(text: &str) -> Result<Pattern, PatternError> {
        let mut nodes: Vec<Node> = Vec::new();
        let mut anchored = false;
        let mut group = Group::None;
        let mut chars = text.char_indices().peekable();
        let mut at_start = true;

        while let Some((pos, c)) = chars.next() {
            let first = std::mem::replace(&mut at_start, false);

            match c {
                '\\' => {
                    let Some((_, escaped)) = chars.next() else {
                        return Err(PatternError::TrailingEscape { pos });
                    };
                    nodes.push(Node::literal(escaped));
                }
                '^' if first => anchored = true,
                '*' => {
                    let repeated = nodes.last_mut().is_some_and(Node::make_repeatable);
                    if !repeated {
                        return Err(PatternError::DanglingQuantifier { pos, quantifier: c });
                    }
                }
                '+' => {
                    let mut tail = match nodes.last() {
                        Some(last) if last.consumes() => last.clone(),
                        _ => return Err(PatternError::DanglingQuantifier { pos, quantifier: c }),
                    };
                    tail.make_repeatable();
                    nodes.push(tail);
                }
                '(' => {
                    if group != Group::None {
                        return Err(PatternError::NestedGroup { pos });
                    }
                    nodes.push(Node::capture_start());
                    group = Group::Open(pos);
                }
                ')' if matches!(group, Group::Open(_)) => {
                    nodes.push(Node::capture_stop());
                    group = Group::Closed;
                }
                ')' if group == Group::Closed => {
                    return Err(PatternError::StrayGroupClose { pos });
                }
                '[' => nodes.push(compile_class(&mut chars, pos)?),
                '.' => nodes.push(Node::range(' ', '~')),
                _ => nodes.push(Node::literal(c)),
            }
        }

        if let Group::Open(pos) = group {
            return Err(PatternError::UnterminatedGroup { pos });
        }

        Ok(Pattern { nodes, anchored })
    }
}

/// Compile the body of a `[...]` class; `open` is the offset of the `[`.
///
/// Escapes have no meaning inside a class. A `-` directly before the
/// closing `]` is taken literally. The scan never runs past the end of
/// the pattern text.
fn compile_class(chars: &mut Peekable<CharIndices<'_>>, open: usize) -> Result<Node, PatternError> {
    let mut node = Node::class();

    if chars.next_if(|&(_, c)| c == '^').is_some() {
        node.negate();
    }

    loop {
        let Some((pos, low)) = chars.next() else {
            return Err(PatternError::UnterminatedClass { pos: open });
        };
        if low == ']' {
            break;
        }

        if chars.next_if(|&(_, c)| c == '-').is_none() {
            node.push_range(low, low);
            continue;
        }

        match chars.next() {
            Some((_, ']')) => {
                node.push_range(low, low);
                node.push_range('-', '-');
                break;
            }
            Some((_, high)) if high < low => {
                return Err(PatternError::InvalidRange { pos, low, high });
            }
            Some((_, high)) => node.push_range(low, high),
            None => return Err(PatternError::UnterminatedClass { pos: open }),
        }
    }

    if node.ranges().is_empty() {
        return Err(PatternError::EmptyClass { pos: open });
    }

    Ok(node)
}

#[cfg(test)]
mod tests;
