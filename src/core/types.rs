//! Domain data structures shared by the engine and its adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied document identifier.
///
/// Uniqueness is the caller's responsibility; the engine does
/// not check it.
pub type DocumentId = i32;

/// A matched document and its relevance for one query.
///
/// Relevance is the number of distinct query plus words the
/// document contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document_id: DocumentId,
    pub relevance: usize,
}

impl ScoredDocument {
    pub fn new(document_id: DocumentId, relevance: usize) -> Self {
        Self {
            document_id,
            relevance,
        }
    }
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {} }}",
            self.document_id, self.relevance
        )
    }
}

/// Result of matching a query against a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMatch {
    pub document_id: DocumentId,
    /// Plus words present in the document, sorted. Empty when a
    /// minus word disqualified the document.
    pub matched_words: Vec<String>,
}

/// Search response with ranked results and timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ScoredDocument>,
    pub count: usize,
    pub duration_ms: u64,
}
