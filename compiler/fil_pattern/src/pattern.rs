//! Compiled patterns and match results.

use crate::Node;

/// A compiled pattern: an ordered node sequence plus the anchor flag.
///
/// Built by [`Pattern::compile`], immutable afterwards. Cloning yields an
/// independent copy; the cache hands out clones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub(crate) nodes: Vec<Node>,
    pub(crate) anchored: bool,
}

impl Pattern {
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Whether the pattern must match at the start of the input.
    #[inline]
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Number of nodes, markers included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the pattern contains a capture group.
    pub fn has_capture(&self) -> bool {
        self.nodes.iter().any(|node| !node.consumes())
    }
}

/// A successful match: `len` bytes starting at byte offset `start`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    pub start: usize,
    pub len: usize,
}

impl Match {
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Match { start, len }
    }

    /// Byte offset just past the match.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The matched slice of `input`.
    #[inline]
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end()]
    }
}
