//! Single-pass, non-backtracking matcher.
//!
//! The matcher keeps one node cursor and one input cursor and never revisits
//! a decision. Repetition is deferential: a repeating node keeps consuming
//! characters in its range set only until the next character-consuming node
//! could take the upcoming character. Unanchored patterns slide the whole
//! window one character to the right on a failed step.
//!
//! Negation is only consulted by single steps. Repetition and lookahead use
//! raw range membership, so `[^a-z]*` repeats over lowercase letters.

use crate::{Match, Node, Pattern};

impl Pattern {
    /// Find the first match of this pattern in `input`.
    ///
    /// Offsets in the returned [`Match`] are byte offsets. With a capture
    /// group the span covers the group; otherwise it runs from the start of
    /// the successful window to the final input position.
    pub fn find(&self, input: &str) -> Option<Match> {
        let nodes = &self.nodes;
        let mut node = 0;
        let mut window = 0;
        let mut pos = 0;
        let mut capture_start = None;
        let mut capture_stop = None;

        while let Some(current) = nodes.get(node) {
            if !current.consumes() {
                if current.is_capture_start() {
                    capture_start = Some(pos);
                } else {
                    capture_stop = Some(pos);
                }
                node += 1;
                continue;
            }

            let Some(c) = input[pos..].chars().next() else {
                break;
            };

            if current.is_repeatable() {
                pos = repeat(current, next_consuming(nodes, node), input, pos);
                node += 1;
            } else if current.accepts(c) {
                pos += c.len_utf8();
                node += 1;
            } else if self.anchored {
                return None;
            } else {
                // Slide the window one character and start over.
                window += input[window..].chars().next().map_or(1, char::len_utf8);
                pos = window;
                node = 0;
                capture_start = None;
                capture_stop = None;
            }
        }

        let satisfied = nodes.get(node).map_or(true, Node::is_repeatable);
        if !satisfied {
            return None;
        }

        let start = capture_start.unwrap_or(window);
        let stop = capture_stop.unwrap_or(pos);
        Some(Match::new(start, stop.saturating_sub(start)))
    }
}

/// The next character-consuming node after `index`, skipping capture markers.
fn next_consuming(nodes: &[Node], index: usize) -> Option<&Node> {
    nodes[index + 1..].iter().find(|node| node.consumes())
}

/// Run a repeating node from `pos`, returning the position it stops at.
fn repeat(node: &Node, next: Option<&Node>, input: &str, mut pos: usize) -> usize {
    for c in input[pos..].chars() {
        let next_takes_over = next.is_some_and(|next| next.contains(c));
        if !node.contains(c) || next_takes_over {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}
