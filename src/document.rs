//! Document value types.
//!
//! A [`Document`] is the ranked-result record handed back by queries; the
//! per-document data stored inside the index (rating, status, source text)
//! is internal to [`crate::index::InvertedIndex`].

use serde::{Deserialize, Serialize};

/// Integer document identifier. Valid ids are non-negative and unique
/// across the lifetime of the engine.
pub type DocumentId = i32;

/// Classification carried with each document and consulted by the default
/// and status-filtered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// A ranked query result: document id, accumulated TF-IDF relevance, and
/// the document's average rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}
