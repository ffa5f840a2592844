//! Rolling-window request log.
//!
//! Tracks the outcomes of the last [`REQUEST_WINDOW_SIZE`] queries (one
//! slot per minute of a day) and exposes how many of them returned no
//! documents. Once the window is full, each new request evicts the
//! oldest entry, adjusting the empty-result counter on both ends.

use crate::config::REQUEST_WINDOW_SIZE;
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::SearchResult;
use crate::search::engine::SearchEngine;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct QueryRecord {
    is_empty: bool,
}

/// Windowed log of query outcomes over a borrowed engine.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<QueryRecord>,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self {
            engine,
            requests: VecDeque::new(),
            no_result_count: 0,
        }
    }

    /// Runs the default `find_top` (status `Actual`) and records the
    /// outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> SearchResult<Vec<Document>> {
        self.add_find_request_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Status-filtered variant of [`add_find_request`](Self::add_find_request).
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> SearchResult<Vec<Document>> {
        self.add_find_request_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Predicate-filtered variant. A query that fails to parse records
    /// nothing.
    pub fn add_find_request_with<P>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> SearchResult<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let result = self.engine.find_top_with(raw_query, predicate)?;
        if self.requests.len() == REQUEST_WINDOW_SIZE {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.is_empty {
                    self.no_result_count -= 1;
                }
            }
        }
        let is_empty = result.is_empty();
        if is_empty {
            self.no_result_count += 1;
        }
        self.requests.push_back(QueryRecord { is_empty });
        Ok(result)
    }

    /// Number of windowed requests that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_engine() -> SearchEngine {
        let mut engine = SearchEngine::new("").unwrap();
        engine
            .add_document(1, "curly cat", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
            .add_document(2, "sleepy dog", DocumentStatus::Actual, &[2])
            .unwrap();
        engine
    }

    #[test]
    fn test_counts_empty_results() {
        let engine = sample_engine();
        let mut queue = RequestQueue::new(&engine);
        queue.add_find_request("cat").unwrap();
        queue.add_find_request("parrot").unwrap();
        queue.add_find_request("crow").unwrap();
        assert_eq!(queue.no_result_requests(), 2);
    }

    #[test]
    fn test_window_eviction_adjusts_counter() {
        let engine = sample_engine();
        let mut queue = RequestQueue::new(&engine);
        for _ in 0..REQUEST_WINDOW_SIZE {
            queue.add_find_request("parrot").unwrap();
        }
        assert_eq!(queue.no_result_requests(), REQUEST_WINDOW_SIZE);
        // Each hit evicts one empty-result entry from the front.
        queue.add_find_request("cat").unwrap();
        assert_eq!(queue.no_result_requests(), REQUEST_WINDOW_SIZE - 1);
        queue.add_find_request("dog").unwrap();
        assert_eq!(queue.no_result_requests(), REQUEST_WINDOW_SIZE - 2);
    }

    #[test]
    fn test_eviction_of_nonempty_keeps_counter() {
        let engine = sample_engine();
        let mut queue = RequestQueue::new(&engine);
        queue.add_find_request("cat").unwrap();
        for _ in 1..REQUEST_WINDOW_SIZE {
            queue.add_find_request("dog").unwrap();
        }
        // Window is full of hits; an empty result evicts a hit.
        queue.add_find_request("parrot").unwrap();
        assert_eq!(queue.no_result_requests(), 1);
    }

    #[test]
    fn test_failed_query_records_nothing() {
        let engine = sample_engine();
        let mut queue = RequestQueue::new(&engine);
        assert!(queue.add_find_request("cat --dog").is_err());
        assert_eq!(queue.no_result_requests(), 0);
    }
}
