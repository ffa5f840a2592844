//! Indexed state: the inverted index and the concurrency primitive used
//! by parallel scoring.

/// Sharded concurrent accumulator keyed by document id.
pub mod concurrent_map;
/// Bidirectional term ↔ document frequency tables.
pub mod inverted;

pub use concurrent_map::{Access, ConcurrentMap};
pub use inverted::{DocumentData, InvertedIndex};
