//! Deterministic top-k selection of scored documents.

use crate::core::types::ScoredDocument;
use std::cmp::Reverse;

/// Default maximum number of results per query
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Orders candidates by relevance and keeps the best `k`.
///
/// Ties are broken by ascending document id, giving a total order
/// so the same candidates always produce the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKSelector {
    k: usize,
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

impl TopKSelector {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Sort and truncate to at most `k` entries
    pub fn select(&self, candidates: Vec<ScoredDocument>) -> Vec<ScoredDocument> {
        let mut ranked = rank(candidates);
        ranked.truncate(self.k);
        ranked
    }
}

/// Sort by relevance descending, document id ascending, without truncating
pub fn rank(mut candidates: Vec<ScoredDocument>) -> Vec<ScoredDocument> {
    candidates.sort_unstable_by_key(|doc| (Reverse(doc.relevance), doc.document_id));
    candidates
}
