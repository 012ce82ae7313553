//! Restricted pattern engine for the Filament lexer.
//!
//! Patterns are compiled in a single left-to-right pass into a flat list of
//! [`Node`]s and executed by a single-pass, non-backtracking matcher. The
//! grammar is deliberately small:
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `\X` | literal `X` |
//! | `.` | any printable ASCII (`' '..='~'`) |
//! | `[abc]`, `[a-z]`, `[^...]` | character class, optionally negated |
//! | `X*` | repeat the previous node zero or more times |
//! | `X+` | previous node once, then repeated |
//! | `(...)` | the single capture group |
//! | leading `^` | anchor at the start of the input |
//!
//! There is no alternation, no nesting, no bounded repetition and no
//! backtracking. Repetition is greedy but stops as soon as the next
//! character-consuming node would accept the upcoming character.
//!
//! Compiled patterns are cached by their source text in a [`PatternCache`].
//! The cache is an ordinary value; [`PatternCache::global`] provides the
//! process-wide instance that [`consume`] uses.

mod cache;
mod compile;
mod error;
mod matcher;
mod node;
mod pattern;

pub use cache::{PatternCache, SharedPatternCache};
pub use error::PatternError;
pub use node::{Node, Role};
pub use pattern::{Match, Pattern};

/// Match `pattern` against `input` through the process-wide cache.
///
/// Returns the matched slice and the rest of the input following it, or
/// `None` if the pattern does not match.
///
/// # Example
///
/// ```
/// let (matched, rest) = fil_pattern::consume("123abc", "^[0-9]+")
///     .unwrap()
///     .unwrap();
/// assert_eq!(matched, "123");
/// assert_eq!(rest, "abc");
/// ```
pub fn consume<'a>(
    input: &'a str,
    pattern: &str,
) -> Result<Option<(&'a str, &'a str)>, PatternError> {
    PatternCache::global().consume(input, pattern)
}
