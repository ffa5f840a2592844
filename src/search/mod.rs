//! Query execution: parsing, TF-IDF scoring, ranking, the engine façade,
//! and parallel batch processing.

/// Parallel execution of query batches.
pub mod batch;
/// `SearchEngine` façade and execution policies.
pub mod engine;
/// Structured queries: plus/minus word sets and the parse modes.
pub mod query;
/// Relevance/rating comparator and top-K truncation.
pub mod ranker;
/// TF-IDF relevance accumulation, sequential and sharded-parallel.
pub mod scorer;

pub use batch::{process_queries, process_queries_joined};
pub use engine::{ExecutionPolicy, SearchEngine};
pub use query::{Query, QueryMode};
