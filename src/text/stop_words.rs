//! Stop-word set, constructed once per engine.
//!
//! Built from either a space-separated string or an arbitrary iterable of
//! strings. Every word is validated on construction; duplicates and empty
//! strings are silently dropped.

use crate::error::{SearchError, SearchResult};
use crate::text::tokenizer::{is_valid_word, split_into_words};
use std::collections::HashSet;

/// Immutable set of terms stripped from documents and queries.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Builds the set from a space-separated string.
    pub fn new(text: &str) -> SearchResult<Self> {
        Self::from_words(split_into_words(text))
    }

    /// Builds the set from any iterable of strings.
    ///
    /// Fails with `InvalidCharacter` if any word contains a control byte.
    pub fn from_words<I, S>(words: I) -> SearchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(SearchError::InvalidCharacter(word.to_string()));
            }
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(Self { words: set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
