//! The search engine façade.
//!
//! Owns the stop-word set and the inverted index, and exposes the public
//! operation surface: document add/remove, ranked queries with status or
//! predicate filters, per-document query matching, frequency views, and id
//! iteration. Mutations take `&mut self` and reads take `&self`, so the
//! readers-writer discipline over the index is enforced at compile time;
//! the parallel policies share nothing mutable except the scoring
//! accumulator.

use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::{SearchError, SearchResult};
use crate::index::InvertedIndex;
use crate::search::query::{Query, QueryMode};
use crate::search::ranker::rank_documents;
use crate::search::scorer::{relevance_parallel, relevance_sequential};
use crate::text::StopWordSet;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Execution policy for queries and removals: single-threaded, or fanned
/// out over rayon with identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}

/// In-memory TF-IDF search engine over short text documents.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    stop_words: StopWordSet,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Creates an engine with stop words given as a space-separated string.
    pub fn new(stop_words: &str) -> SearchResult<Self> {
        Ok(Self {
            stop_words: StopWordSet::new(stop_words)?,
            index: InvertedIndex::new(),
        })
    }

    /// Creates an engine with stop words from any iterable of strings.
    pub fn from_stop_words<I, S>(stop_words: I) -> SearchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stop_words: StopWordSet::from_words(stop_words)?,
            index: InvertedIndex::new(),
        })
    }

    /// Indexes a document. Either fully indexes it or, on error, leaves
    /// the engine unchanged.
    pub fn add_document(
        &mut self,
        document_id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> SearchResult<()> {
        self.index
            .add(document_id, text, &self.stop_words, status, ratings)?;
        debug!(document_id, "indexed document");
        Ok(())
    }

    /// Removes a document. A no-op for unknown ids.
    pub fn remove_document(&mut self, document_id: DocumentId) {
        self.remove_document_with_policy(ExecutionPolicy::Sequential, document_id);
    }

    /// [`remove_document`](Self::remove_document) under an explicit policy;
    /// the parallel variant erases the document's posting entries
    /// concurrently.
    pub fn remove_document_with_policy(
        &mut self,
        policy: ExecutionPolicy,
        document_id: DocumentId,
    ) {
        match policy {
            ExecutionPolicy::Sequential => self.index.remove(document_id),
            ExecutionPolicy::Parallel => self.index.remove_parallel(document_id),
        }
        debug!(document_id, "removed document");
    }

    /// Top documents for a query, admitting only `Actual` documents.
    pub fn find_top(&self, raw_query: &str) -> SearchResult<Vec<Document>> {
        self.find_top_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Top documents admitting only the given status.
    pub fn find_top_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> SearchResult<Vec<Document>> {
        self.find_top_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top documents admitted by an arbitrary `(id, status, rating)`
    /// predicate.
    pub fn find_top_with<P>(&self, raw_query: &str, predicate: P) -> SearchResult<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_with_policy(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// [`find_top`](Self::find_top) under an explicit policy.
    pub fn find_top_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
    ) -> SearchResult<Vec<Document>> {
        self.find_top_status_policy(policy, raw_query, DocumentStatus::Actual)
    }

    /// [`find_top_with_status`](Self::find_top_with_status) under an
    /// explicit policy.
    pub fn find_top_status_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        status: DocumentStatus,
    ) -> SearchResult<Vec<Document>> {
        self.find_top_with_policy(policy, raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// The general ranked query: parse, score under the chosen policy,
    /// rank, truncate. Both policies return identical vectors.
    pub fn find_top_with_policy<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> SearchResult<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = Query::parse(raw_query, &self.stop_words, QueryMode::Ordered)?;
        let relevance = match policy {
            ExecutionPolicy::Sequential => relevance_sequential(&self.index, &query, predicate),
            ExecutionPolicy::Parallel => relevance_parallel(&self.index, &query, predicate),
        };
        let mut matched: Vec<Document> = relevance
            .into_iter()
            .filter_map(|(document_id, relevance)| {
                self.index.document(document_id).map(|data| Document {
                    id: document_id,
                    relevance,
                    rating: data.rating,
                })
            })
            .collect();
        rank_documents(&mut matched);
        Ok(matched)
    }

    /// Plus words of the query that occur in the given document, and the
    /// document's status. Any minus-word hit empties the term list.
    ///
    /// Fails with `InvalidId` for a negative or unknown id, checked before
    /// the query is parsed.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocumentId,
    ) -> SearchResult<(Vec<&str>, DocumentStatus)> {
        self.match_document_with_policy(ExecutionPolicy::Sequential, raw_query, document_id)
    }

    /// [`match_document`](Self::match_document) under an explicit policy.
    /// The parallel variant parses unordered and sorts + deduplicates the
    /// matched terms instead.
    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        document_id: DocumentId,
    ) -> SearchResult<(Vec<&str>, DocumentStatus)> {
        let Some(data) = self.index.document(document_id) else {
            return Err(SearchError::InvalidId(document_id));
        };
        match policy {
            ExecutionPolicy::Sequential => {
                let query = Query::parse(raw_query, &self.stop_words, QueryMode::Ordered)?;
                for word in &query.minus_words {
                    if self.index.term_in_document(word, document_id).is_some() {
                        return Ok((Vec::new(), data.status));
                    }
                }
                let matched: Vec<&str> = query
                    .plus_words
                    .iter()
                    .filter_map(|word| self.index.term_in_document(word, document_id))
                    .collect();
                Ok((matched, data.status))
            }
            ExecutionPolicy::Parallel => {
                let query = Query::parse(raw_query, &self.stop_words, QueryMode::Unordered)?;
                if query
                    .minus_words
                    .iter()
                    .any(|word| self.index.term_in_document(word, document_id).is_some())
                {
                    return Ok((Vec::new(), data.status));
                }
                let mut matched: Vec<&str> = query
                    .plus_words
                    .par_iter()
                    .filter_map(|word| self.index.term_in_document(word, document_id))
                    .collect();
                matched.par_sort_unstable();
                matched.dedup();
                Ok((matched, data.status))
            }
        }
    }

    /// Term frequencies of a document; the shared empty table for unknown
    /// ids. Never fails.
    pub fn word_frequencies(&self, document_id: DocumentId) -> &BTreeMap<String, f64> {
        self.index.word_frequencies(document_id)
    }

    pub fn document_count(&self) -> usize {
        self.index.count()
    }

    /// Ascending iteration over the indexed document ids.
    pub fn iter_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.index.iter_ids()
    }
}
