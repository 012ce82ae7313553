//! Match nodes: one step of a compiled pattern.

/// What a node does when the matcher reaches it.
///
/// Repetition and capture marking are separate roles, so a node can never
/// be both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Consume exactly one accepted character.
    Step,
    /// Consume zero or more characters (`*`, and the tail of `+`).
    Repeat,
    /// Zero-width: record the start of the capture group.
    CaptureStart,
    /// Zero-width: record the end of the capture group.
    CaptureStop,
}

/// One step of a compiled pattern.
///
/// Holds a set of inclusive character ranges; a single character is the
/// degenerate range `(c, c)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    ranges: Vec<(char, char)>,
    negated: bool,
    role: Role,
}

impl Node {
    /// A node accepting exactly `c`.
    pub fn literal(c: char) -> Self {
        Self::range(c, c)
    }

    /// A node accepting every character in `low..=high`.
    pub fn range(low: char, high: char) -> Self {
        Node {
            ranges: vec![(low, high)],
            negated: false,
            role: Role::Step,
        }
    }

    /// An empty class node, filled in by the class compiler.
    pub(crate) fn class() -> Self {
        Node {
            ranges: Vec::new(),
            negated: false,
            role: Role::Step,
        }
    }

    /// Zero-width capture start marker.
    pub fn capture_start() -> Self {
        Node {
            ranges: Vec::new(),
            negated: false,
            role: Role::CaptureStart,
        }
    }

    /// Zero-width capture stop marker.
    pub fn capture_stop() -> Self {
        Node {
            ranges: Vec::new(),
            negated: false,
            role: Role::CaptureStop,
        }
    }

    pub(crate) fn push_range(&mut self, low: char, high: char) {
        self.ranges.push((low, high));
    }

    pub(crate) fn negate(&mut self) {
        self.negated = true;
    }

    /// Turn a character-consuming node into a repeating one.
    ///
    /// Returns `false` (and leaves the node untouched) for capture markers.
    pub(crate) fn make_repeatable(&mut self) -> bool {
        match self.role {
            Role::Step | Role::Repeat => {
                self.role = Role::Repeat;
                true
            }
            Role::CaptureStart | Role::CaptureStop => false,
        }
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[inline]
    pub fn is_repeatable(&self) -> bool {
        self.role == Role::Repeat
    }

    #[inline]
    pub fn is_capture_start(&self) -> bool {
        self.role == Role::CaptureStart
    }

    /// Check if this node consumes input (i.e. is not a capture marker).
    #[inline]
    pub fn consumes(&self) -> bool {
        matches!(self.role, Role::Step | Role::Repeat)
    }

    /// Raw range membership, ignoring negation.
    ///
    /// Repetition and lookahead test with this, not with [`Node::accepts`].
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(low, high)| low <= c && c <= high)
    }

    /// Single-step acceptance: range membership, inverted for `[^...]`.
    #[inline]
    pub fn accepts(&self, c: char) -> bool {
        self.contains(c) != self.negated
    }
}
