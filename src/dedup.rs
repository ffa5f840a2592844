//! Duplicate-document detection and removal.
//!
//! Two documents are duplicates when their term *sets* coincide; term
//! frequencies are deliberately ignored. The first-seen (lowest) id is
//! retained and every later duplicate is removed, each removal preceded
//! by a diagnostic line in a byte-exact format.

use crate::document::DocumentId;
use crate::search::engine::SearchEngine;
use std::collections::BTreeSet;
use std::io::{self, Write};
use tracing::debug;

/// Removes duplicate documents, reporting each removed id to `out` as
/// `Found duplicate document id <id>`.
///
/// Ids are scanned in ascending order, so the retained document is always
/// the one with the smallest id; removals also happen in ascending order.
/// Idempotent: a second invocation removes nothing.
pub fn remove_duplicates_to<W: Write>(engine: &mut SearchEngine, out: &mut W) -> io::Result<()> {
    let duplicates: Vec<DocumentId> = {
        let mut seen: BTreeSet<Vec<&str>> = BTreeSet::new();
        let mut duplicates = Vec::new();
        for document_id in engine.iter_ids() {
            let words: Vec<&str> = engine
                .word_frequencies(document_id)
                .keys()
                .map(String::as_str)
                .collect();
            if !seen.insert(words) {
                duplicates.push(document_id);
            }
        }
        duplicates
    };
    debug!(count = duplicates.len(), "removing duplicate documents");
    for document_id in duplicates {
        writeln!(out, "Found duplicate document id {document_id}")?;
        engine.remove_document(document_id);
    }
    Ok(())
}

/// [`remove_duplicates_to`] writing its diagnostics to stdout.
pub fn remove_duplicates(engine: &mut SearchEngine) {
    let _ = remove_duplicates_to(engine, &mut io::stdout().lock());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    fn add(engine: &mut SearchEngine, id: DocumentId, text: &str) {
        engine
            .add_document(id, text, DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();
    }

    #[test]
    fn test_removes_reordered_duplicate() {
        let mut engine = SearchEngine::new("").unwrap();
        add(&mut engine, 1, "a b c");
        add(&mut engine, 2, "c b a");
        add(&mut engine, 3, "a b c d");
        let mut out = Vec::new();
        remove_duplicates_to(&mut engine, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Found duplicate document id 2\n");
        let ids: Vec<DocumentId> = engine.iter_ids().collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_multiplicities_are_ignored() {
        let mut engine = SearchEngine::new("").unwrap();
        add(&mut engine, 1, "a b");
        add(&mut engine, 2, "a a b b b");
        let mut out = Vec::new();
        remove_duplicates_to(&mut engine, &mut out).unwrap();
        assert_eq!(engine.document_count(), 1);
        assert!(engine.iter_ids().eq([1]));
    }

    #[test]
    fn test_first_seen_id_is_retained() {
        let mut engine = SearchEngine::new("").unwrap();
        add(&mut engine, 5, "x y");
        add(&mut engine, 3, "y x");
        add(&mut engine, 9, "x y");
        let mut out = Vec::new();
        remove_duplicates_to(&mut engine, &mut out).unwrap();
        assert!(engine.iter_ids().eq([3]));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Found duplicate document id 5\nFound duplicate document id 9\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let mut engine = SearchEngine::new("").unwrap();
        add(&mut engine, 1, "a b");
        add(&mut engine, 2, "b a");
        let mut out = Vec::new();
        remove_duplicates_to(&mut engine, &mut out).unwrap();
        out.clear();
        remove_duplicates_to(&mut engine, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(engine.document_count(), 1);
    }

    #[test]
    fn test_no_duplicates_is_silent() {
        let mut engine = SearchEngine::new("").unwrap();
        add(&mut engine, 1, "a b");
        add(&mut engine, 2, "b c");
        let mut out = Vec::new();
        remove_duplicates_to(&mut engine, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(engine.document_count(), 2);
    }
}
