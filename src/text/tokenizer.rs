//! ASCII-space tokenizer with character-set validation.
//!
//! Tokens are maximal non-space runs; the only separator is the ASCII
//! space 0x20. No lowercasing, no punctuation trimming. A word is valid
//! iff every byte is at least 0x20 — multi-byte UTF-8 sequences pass,
//! control bytes anywhere fail the whole operation.

use crate::error::{SearchError, SearchResult};
use crate::text::stop_words::StopWordSet;

/// Splits `text` on ASCII spaces, discarding empty runs.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// A word is valid iff it contains no control bytes (< 0x20).
pub fn is_valid_word(word: &str) -> bool {
    word.bytes().all(|b| b >= 0x20)
}

/// Splits `text` into validated words with stop words removed.
///
/// Returns `InvalidCharacter` if any token contains a control byte; the
/// check runs on the raw token, before the stop-word test, so invalid
/// bytes fail even inside would-be stop words.
pub fn split_into_words_no_stop<'a>(
    text: &'a str,
    stop_words: &StopWordSet,
) -> SearchResult<Vec<&'a str>> {
    let mut words = Vec::new();
    for word in split_into_words(text) {
        if !is_valid_word(word) {
            return Err(SearchError::InvalidCharacter(word.to_string()));
        }
        if !stop_words.contains(word) {
            words.push(word);
        }
    }
    Ok(words)
}
