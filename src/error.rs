//! Error taxonomy for indexing and query parsing.
//!
//! Every failure is surfaced synchronously as a [`SearchError`] value;
//! nothing is retried inside the engine. A failed `add_document` leaves
//! the index untouched.

use crate::document::DocumentId;
use thiserror::Error;

/// Errors produced by document indexing and query parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Negative id on add, or negative/unknown id on `match_document`.
    #[error("invalid document id {0}")]
    InvalidId(DocumentId),
    /// Add with an id that is already indexed.
    #[error("document id {0} is already indexed")]
    DuplicateId(DocumentId),
    /// A control byte (< 0x20) in document text, stop words, or a query.
    #[error("invalid character in word {0:?}")]
    InvalidCharacter(String),
    /// Query token consisting of a bare `-`.
    #[error("empty minus word in query")]
    EmptyMinusWord,
    /// Query token starting with `--`.
    #[error("double minus in query word {0:?}")]
    DoubleMinus(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
