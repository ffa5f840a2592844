//! Parallel execution of query batches.
//!
//! Each query runs an independent sequential `find_top`; rayon fans the
//! batch out over workers and the collected output preserves input order.
//! A malformed query fails the whole batch.

use crate::document::Document;
use crate::error::SearchResult;
use crate::search::engine::SearchEngine;
use rayon::prelude::*;

/// Runs `find_top` for every query concurrently; the outer vector is in
/// input order.
pub fn process_queries<S>(
    engine: &SearchEngine,
    queries: &[S],
) -> SearchResult<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|raw_query| engine.find_top(raw_query.as_ref()))
        .collect()
}

/// [`process_queries`] with the per-query vectors flattened in input order.
pub fn process_queries_joined<S>(
    engine: &SearchEngine,
    queries: &[S],
) -> SearchResult<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?.into_iter().flatten().collect())
}
