//! TF-IDF relevance accumulation.
//!
//! Both paths run the same two phases: plus words add `tf · idf` for every
//! predicate-admitted posting, then minus words erase their documents.
//! The sequential path accumulates into an ordinary ordered map; the
//! parallel path fans each phase out over the query words with a
//! [`ConcurrentMap`] as the only shared-mutable state, then drains it into
//! the same ordered shape. A plus word with zero idf still inserts its
//! documents, so filter-admitted matches survive ranking with relevance 0.

use crate::config::ACCUMULATOR_SHARDS;
use crate::document::{DocumentId, DocumentStatus};
use crate::index::{ConcurrentMap, InvertedIndex};
use crate::search::query::Query;
use rayon::prelude::*;
use std::collections::BTreeMap;

pub(crate) fn relevance_sequential<P>(
    index: &InvertedIndex,
    query: &Query,
    predicate: P,
) -> BTreeMap<DocumentId, f64>
where
    P: Fn(DocumentId, DocumentStatus, i32) -> bool,
{
    let mut relevance = BTreeMap::new();
    for word in &query.plus_words {
        let Some(postings) = index.postings(word) else {
            continue;
        };
        let idf = index.inverse_document_frequency(word);
        for (&document_id, &term_frequency) in postings {
            let Some(data) = index.document(document_id) else {
                continue;
            };
            if predicate(document_id, data.status, data.rating) {
                *relevance.entry(document_id).or_insert(0.0) += term_frequency * idf;
            }
        }
    }
    for word in &query.minus_words {
        let Some(postings) = index.postings(word) else {
            continue;
        };
        for document_id in postings.keys() {
            relevance.remove(document_id);
        }
    }
    relevance
}

pub(crate) fn relevance_parallel<P>(
    index: &InvertedIndex,
    query: &Query,
    predicate: P,
) -> BTreeMap<DocumentId, f64>
where
    P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
{
    let accumulator: ConcurrentMap<f64> = ConcurrentMap::new(ACCUMULATOR_SHARDS);
    query.plus_words.par_iter().for_each(|word| {
        let Some(postings) = index.postings(word) else {
            return;
        };
        let idf = index.inverse_document_frequency(word);
        for (&document_id, &term_frequency) in postings {
            let Some(data) = index.document(document_id) else {
                continue;
            };
            if predicate(document_id, data.status, data.rating) {
                *accumulator.access(document_id).value_mut() += term_frequency * idf;
            }
        }
    });
    // The minus phase must observe a completed plus phase.
    query.minus_words.par_iter().for_each(|word| {
        let Some(postings) = index.postings(word) else {
            return;
        };
        for &document_id in postings.keys() {
            accumulator.erase(document_id);
        }
    });
    accumulator.drain()
}
