//! Compiled-pattern cache keyed by pattern text.
//!
//! Lookups take a read lock; a miss compiles outside the lock and inserts
//! under a write lock. Two threads missing on the same text at once both
//! compile it and the first insert wins, which is harmless because
//! compilation is deterministic.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{Pattern, PatternError};

/// Cache from pattern source text to compiled [`Pattern`].
///
/// Hands out clones, so callers never share mutable state with the cache.
/// Compilation failures are not cached.
#[derive(Default)]
pub struct PatternCache {
    patterns: RwLock<FxHashMap<String, Pattern>>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`consume`](crate::consume).
    pub fn global() -> &'static PatternCache {
        static GLOBAL: OnceLock<PatternCache> = OnceLock::new();
        GLOBAL.get_or_init(PatternCache::new)
    }

    /// Return a copy of the compiled form of `text`, compiling on first use.
    pub fn get_or_compile(&self, text: &str) -> Result<Pattern, PatternError> {
        if let Some(pattern) = self.patterns.read().get(text) {
            trace!(pattern = text, "pattern cache hit");
            return Ok(pattern.clone());
        }

        let compiled = Pattern::compile(text)?;
        debug!(
            pattern = text,
            nodes = compiled.len(),
            anchored = compiled.is_anchored(),
            "compiled pattern"
        );

        let mut patterns = self.patterns.write();
        Ok(patterns.entry(text.to_owned()).or_insert(compiled).clone())
    }

    /// Compile (or fetch) `pattern` and match it against `input`.
    ///
    /// Returns the matched slice and the remainder after it.
    pub fn consume<'a>(
        &self,
        input: &'a str,
        pattern: &str,
    ) -> Result<Option<(&'a str, &'a str)>, PatternError> {
        let compiled = self.get_or_compile(pattern)?;
        Ok(compiled
            .find(input)
            .map(|m| (m.as_str(input), &input[m.end()..])))
    }

    /// Check if `text` has already been compiled into this cache.
    pub fn contains(&self, text: &str) -> bool {
        self.patterns.read().contains_key(text)
    }

    /// Number of distinct pattern texts cached.
    pub fn len(&self) -> usize {
        self.patterns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.read().is_empty()
    }

    /// Drop every cached pattern.
    pub fn clear(&self) {
        self.patterns.write().clear();
    }
}

/// Thread-safe shared handle to a [`PatternCache`].
///
/// Lexers hold one of these so several lexers (or threads) can share
/// compiled patterns without reaching for the global cache.
#[derive(Clone, Default)]
pub struct SharedPatternCache(Arc<PatternCache>);

impl SharedPatternCache {
    /// Create a new, empty shared cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::ops::Deref for SharedPatternCache {
    type Target = PatternCache;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
