//! Result ranking: relevance-descending order with rating tie-breaks.

use crate::config::{MAX_RESULT_COUNT, RELEVANCE_EPSILON};
use crate::document::Document;
use std::cmp::Ordering;

/// Sorts candidates by relevance descending, breaking near-ties
/// (|Δrelevance| < [`RELEVANCE_EPSILON`]) by rating descending, and
/// truncates to [`MAX_RESULT_COUNT`]. The sort is stable, so candidates
/// tied on both keys keep their ascending-id input order.
pub(crate) fn rank_documents(candidates: &mut Vec<Document>) {
    candidates.sort_by(|lhs, rhs| {
        if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
            rhs.rating.cmp(&lhs.rating)
        } else {
            rhs.relevance
                .partial_cmp(&lhs.relevance)
                .unwrap_or(Ordering::Equal)
        }
    });
    candidates.truncate(MAX_RESULT_COUNT);
}
