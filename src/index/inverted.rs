//! Inverted index: the authoritative indexed state.
//!
//! Four structures are kept in lockstep: `by_term` maps every term to its
//! posting list (document id → term frequency), `by_doc` holds the mirror
//! per-document frequency tables, `docs` carries the stored document
//! records, and `ids` is the ordered id set driving ascending iteration.
//! Between any two public calls the maps agree exactly: the same ids, the
//! same (term, document) pairs on both sides, and per-document frequencies
//! summing to 1. Posting lists are pruned when their last entry is erased,
//! so `by_term` never holds an empty inner map.

use crate::document::{DocumentId, DocumentStatus};
use crate::error::{SearchError, SearchResult};
use crate::text::{split_into_words_no_stop, StopWordSet};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Shared empty table returned for unknown ids.
static EMPTY_FREQUENCIES: BTreeMap<String, f64> = BTreeMap::new();

/// Stored per-document record. The source text is pinned for the
/// document's lifetime so term views stay backed by engine-owned storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
    pub text: String,
}

/// Bidirectional term ↔ document frequency tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    /// term → (document id → term frequency)
    by_term: BTreeMap<String, BTreeMap<DocumentId, f64>>,
    /// document id → (term → term frequency)
    by_doc: BTreeMap<DocumentId, BTreeMap<String, f64>>,
    docs: BTreeMap<DocumentId, DocumentData>,
    ids: BTreeSet<DocumentId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes a document.
    ///
    /// Errors, checked in order: `InvalidId` for a negative id,
    /// `DuplicateId` for an id already present, `InvalidCharacter` for a
    /// control byte anywhere in `text`. Validation completes before the
    /// first mutation, so a failed add leaves the index unchanged. Each
    /// token occurrence contributes `1 / token_count` to both frequency
    /// tables.
    pub fn add(
        &mut self,
        document_id: DocumentId,
        text: &str,
        stop_words: &StopWordSet,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> SearchResult<()> {
        if document_id < 0 {
            return Err(SearchError::InvalidId(document_id));
        }
        if self.docs.contains_key(&document_id) {
            return Err(SearchError::DuplicateId(document_id));
        }
        let words = split_into_words_no_stop(text, stop_words)?;

        let inverse_word_count = 1.0 / words.len() as f64;
        let mut frequencies: BTreeMap<String, f64> = BTreeMap::new();
        for word in words {
            *frequencies.entry(word.to_string()).or_insert(0.0) += inverse_word_count;
        }
        for (word, frequency) in &frequencies {
            self.by_term
                .entry(word.clone())
                .or_default()
                .insert(document_id, *frequency);
        }
        self.by_doc.insert(document_id, frequencies);
        self.docs.insert(
            document_id,
            DocumentData {
                rating: average_rating(ratings),
                status,
                text: text.to_string(),
            },
        );
        self.ids.insert(document_id);
        Ok(())
    }

    /// Removes a document. A no-op for unknown ids.
    pub fn remove(&mut self, document_id: DocumentId) {
        let Some(frequencies) = self.by_doc.remove(&document_id) else {
            return;
        };
        for word in frequencies.keys() {
            let emptied = match self.by_term.get_mut(word) {
                Some(postings) => {
                    postings.remove(&document_id);
                    postings.is_empty()
                }
                None => false,
            };
            if emptied {
                self.by_term.remove(word);
            }
        }
        self.docs.remove(&document_id);
        self.ids.remove(&document_id);
    }

    /// [`remove`](Self::remove) with the posting-list erasure fanned out
    /// over the document's terms.
    pub fn remove_parallel(&mut self, document_id: DocumentId) {
        let Some(frequencies) = self.by_doc.remove(&document_id) else {
            return;
        };
        let emptied: Vec<String> = self
            .by_term
            .iter_mut()
            .filter(|(word, _)| frequencies.contains_key(word.as_str()))
            .par_bridge()
            .filter_map(|(word, postings)| {
                postings.remove(&document_id);
                postings.is_empty().then(|| word.clone())
            })
            .collect();
        for word in emptied {
            self.by_term.remove(&word);
        }
        self.docs.remove(&document_id);
        self.ids.remove(&document_id);
    }

    /// Term frequencies for a document, or the shared empty table for an
    /// unknown id. Never fails.
    pub fn word_frequencies(&self, document_id: DocumentId) -> &BTreeMap<String, f64> {
        self.by_doc.get(&document_id).unwrap_or(&EMPTY_FREQUENCIES)
    }

    /// Posting list for a term. A missing term and an empty posting list
    /// are both `None`.
    pub fn postings(&self, word: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.by_term.get(word).filter(|postings| !postings.is_empty())
    }

    /// `ln(N / df)` for a term present in the index. Callers guarantee the
    /// term has a non-empty posting list.
    pub fn inverse_document_frequency(&self, word: &str) -> f64 {
        let documents_with_word = self.by_term.get(word).map_or(0, BTreeMap::len);
        (self.docs.len() as f64 / documents_with_word as f64).ln()
    }

    /// The index-owned view of `word` if it occurs in the given document.
    pub fn term_in_document(&self, word: &str, document_id: DocumentId) -> Option<&str> {
        let (term, postings) = self.by_term.get_key_value(word)?;
        postings
            .contains_key(&document_id)
            .then_some(term.as_str())
    }

    pub fn document(&self, document_id: DocumentId) -> Option<&DocumentData> {
        self.docs.get(&document_id)
    }

    pub fn count(&self) -> usize {
        self.docs.len()
    }

    /// Ascending iteration over the indexed document ids.
    pub fn iter_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.ids.iter().copied()
    }
}

/// Integer average truncating toward zero; 0 for an empty slice.
fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&rating| i64::from(rating)).sum();
    (sum / ratings.len() as i64) as i32
}
