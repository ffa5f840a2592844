//! Structured queries parsed from raw text.
//!
//! A query token starting with `-` contributes its remainder to the minus
//! side; everything else is a plus word. Stop words are dropped from both
//! sides after minus-stripping. Ordered parsing sorts and deduplicates
//! both sides; unordered parsing keeps raw order and duplicates for the
//! parallel match path, which sorts its output instead.

use crate::error::{SearchError, SearchResult};
use crate::text::tokenizer::{is_valid_word, split_into_words};
use crate::text::StopWordSet;

/// Whether the parsed word sides are sorted and deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Ordered,
    Unordered,
}

/// A parsed query: words that score documents and words that exclude them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub plus_words: Vec<String>,
    pub minus_words: Vec<String>,
}

impl Query {
    /// Parses raw query text.
    ///
    /// Fails with `InvalidCharacter` for control bytes, `EmptyMinusWord`
    /// for a bare `-` token, and `DoubleMinus` for a `--` prefix.
    pub fn parse(text: &str, stop_words: &StopWordSet, mode: QueryMode) -> SearchResult<Self> {
        let mut query = Query::default();
        for raw_word in split_into_words(text) {
            if !is_valid_word(raw_word) {
                return Err(SearchError::InvalidCharacter(raw_word.to_string()));
            }
            let (word, is_minus) = parse_query_word(raw_word)?;
            if stop_words.contains(word) {
                continue;
            }
            if is_minus {
                query.minus_words.push(word.to_string());
            } else {
                query.plus_words.push(word.to_string());
            }
        }
        if mode == QueryMode::Ordered {
            query.plus_words.sort_unstable();
            query.plus_words.dedup();
            query.minus_words.sort_unstable();
            query.minus_words.dedup();
        }
        Ok(query)
    }
}

fn parse_query_word(raw_word: &str) -> SearchResult<(&str, bool)> {
    match raw_word.strip_prefix('-') {
        Some("") => Err(SearchError::EmptyMinusWord),
        Some(word) if word.starts_with('-') => {
            Err(SearchError::DoubleMinus(raw_word.to_string()))
        }
        Some(word) => Ok((word, true)),
        None => Ok((raw_word, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, mode: QueryMode) -> SearchResult<Query> {
        let stop = StopWordSet::new("in the").unwrap();
        Query::parse(text, &stop, mode)
    }

    #[test]
    fn test_plus_and_minus_sides() {
        let query = parse("cat -dog city", QueryMode::Ordered).unwrap();
        assert_eq!(query.plus_words, vec!["cat", "city"]);
        assert_eq!(query.minus_words, vec!["dog"]);
    }

    #[test]
    fn test_ordered_sorts_and_dedups() {
        let query = parse("dog cat dog -bird -bird", QueryMode::Ordered).unwrap();
        assert_eq!(query.plus_words, vec!["cat", "dog"]);
        assert_eq!(query.minus_words, vec!["bird"]);
    }

    #[test]
    fn test_unordered_keeps_duplicates() {
        let query = parse("dog cat dog", QueryMode::Unordered).unwrap();
        assert_eq!(query.plus_words, vec!["dog", "cat", "dog"]);
    }

    #[test]
    fn test_stop_words_dropped_after_minus_stripping() {
        let query = parse("cat -the in", QueryMode::Ordered).unwrap();
        assert_eq!(query.plus_words, vec!["cat"]);
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn test_bare_minus_fails() {
        assert_eq!(
            parse("cat -", QueryMode::Ordered).unwrap_err(),
            SearchError::EmptyMinusWord
        );
    }

    #[test]
    fn test_double_minus_fails() {
        assert_eq!(
            parse("cat --dog", QueryMode::Ordered).unwrap_err(),
            SearchError::DoubleMinus("--dog".to_string())
        );
    }

    #[test]
    fn test_invalid_character_fails() {
        assert_eq!(
            parse("ca\x02t", QueryMode::Ordered).unwrap_err(),
            SearchError::InvalidCharacter("ca\x02t".to_string())
        );
    }

    #[test]
    fn test_interior_hyphen_is_plain_word() {
        let query = parse("ice-cream x-", QueryMode::Ordered).unwrap();
        assert_eq!(query.plus_words, vec!["ice-cream", "x-"]);
    }
}
