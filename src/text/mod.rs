//! Text processing: whitespace tokenization and the stop-word set.

/// Immutable set of terms stripped during tokenization.
pub mod stop_words;
/// ASCII-space tokenizer with character-set validation.
pub mod tokenizer;

pub use stop_words::StopWordSet;
pub use tokenizer::{is_valid_word, split_into_words, split_into_words_no_stop};
