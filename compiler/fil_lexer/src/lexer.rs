//! Lexeme table and the longest-match scanner.

use fil_ir::{Span, TokenKind};
use fil_pattern::{Match, Pattern, PatternCache, PatternError, SharedPatternCache};
use tracing::{debug, trace};

use crate::{LexError, LexOutput, Token};

/// A compiled pattern bound to a token kind and a priority.
///
/// The pattern is always anchored: it only ever matches at the start of the
/// remaining input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pattern: Pattern,
    kind: TokenKind,
    priority: i32,
}

impl Lexeme {
    /// Compile `pattern` (anchored) through `cache`.
    pub fn new(
        cache: &PatternCache,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
    ) -> Result<Self, PatternError> {
        let pattern = cache.get_or_compile(&format!("^{pattern}"))?;
        Ok(Lexeme {
            pattern,
            kind,
            priority,
        })
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Match at the start of `input`.
    ///
    /// Matches that consume nothing are treated as no match, so the scanner
    /// always makes progress.
    pub fn match_prefix(&self, input: &str) -> Option<Match> {
        self.pattern.find(input).filter(|m| m.end() > 0)
    }
}

/// Tokenizer over a fixed table of lexemes.
///
/// Register lexemes with [`Lexer::add`] at setup time, then call
/// [`Lexer::tokenize`] as often as needed.
#[derive(Clone, Default)]
pub struct Lexer {
    cache: SharedPatternCache,
    lexemes: Vec<Lexeme>,
}

impl Lexer {
    /// Create an empty lexer with its own pattern cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty lexer compiling through a shared cache.
    pub fn with_cache(cache: SharedPatternCache) -> Self {
        Lexer {
            cache,
            lexemes: Vec::new(),
        }
    }

    /// Register a lexeme.
    ///
    /// `priority` only matters between lexemes matching the same length;
    /// give keywords a higher priority than the identifier pattern. A
    /// malformed pattern leaves the table unchanged.
    pub fn add(
        &mut self,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
    ) -> Result<(), PatternError> {
        let lexeme = Lexeme::new(&self.cache, pattern, kind, priority)?;
        debug!(pattern, kind = kind.name(), priority, "registered lexeme");
        self.lexemes.push(lexeme);
        Ok(())
    }

    /// Register a lexeme with the default priority of 0.
    pub fn add_lexeme(&mut self, pattern: &str, kind: TokenKind) -> Result<(), PatternError> {
        self.add(pattern, kind, 0)
    }

    #[inline]
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// The cache this lexer compiles through.
    #[inline]
    pub fn cache(&self) -> &SharedPatternCache {
        &self.cache
    }

    /// Tokenize `source`.
    ///
    /// Spaces, tabs and newlines between tokens are skipped. Stops at the
    /// first character no lexeme matches and reports it in
    /// [`LexOutput::error`], keeping the tokens lexed so far.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn tokenize<'src>(&self, source: &'src str) -> LexOutput<'src> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        loop {
            pos += source[pos..]
                .bytes()
                .take_while(|b| matches!(b, b' ' | b'\t' | b'\n'))
                .count();

            let rest = &source[pos..];
            let Some(found) = rest.chars().next() else {
                break;
            };

            let Some((lexeme, m)) = self.longest_match(rest) else {
                let error = LexError::new(pos, found);
                debug!(offset = pos, %error, tokens = tokens.len(), "lexing stopped");
                return LexOutput {
                    tokens,
                    error: Some(error),
                };
            };

            let kind = lexeme.kind();
            let text = if kind.carries_text() { m.as_str(rest) } else { "" };
            let span = Span::new(pos + m.start, pos + m.end());
            trace!(kind = kind.name(), text, %span, "token");

            tokens.push(Token::new(text, kind, span));
            pos += m.end();
        }

        debug!(tokens = tokens.len(), "lexing complete");
        LexOutput {
            tokens,
            error: None,
        }
    }

    /// Pick the lexeme with the longest match at the start of `rest`.
    ///
    /// Equal lengths go to the higher priority, then to the earlier
    /// registration.
    fn longest_match(&self, rest: &str) -> Option<(&Lexeme, Match)> {
        let mut best: Option<(&Lexeme, Match)> = None;

        for lexeme in &self.lexemes {
            let Some(m) = lexeme.match_prefix(rest) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((held, held_match)) => {
                    m.end() > held_match.end()
                        || (m.end() == held_match.end() && lexeme.priority() > held.priority())
                }
            };
            if better {
                best = Some((lexeme, m));
            }
        }

        best
    }
}
