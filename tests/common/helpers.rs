// Test helper functions

use docsearch::core::config::SearchConfig;
use docsearch::core::index::IndexBuilder;
use docsearch::core::search::SearchServer;
use docsearch::core::types::{DocumentId, ScoredDocument};

/// Build a server over `documents` with ids 0..N
#[allow(dead_code)] // Used in integration tests
pub fn build_server(stop_words: &str, documents: &[&str], max_results: usize) -> SearchServer {
    let mut builder = IndexBuilder::with_config(SearchConfig {
        max_results,
        ..SearchConfig::default()
    });
    builder
        .set_stop_words(stop_words)
        .expect("Stop words should be accepted before documents");

    for (id, text) in documents.iter().enumerate() {
        builder.add_document(id as DocumentId, text);
    }
    builder.build()
}

/// Document ids of a result list, in order
#[allow(dead_code)] // Used in integration tests
pub fn ids(results: &[ScoredDocument]) -> Vec<DocumentId> {
    results.iter().map(|doc| doc.document_id).collect()
}

/// (id, relevance) pairs of a result list, in order
#[allow(dead_code)] // Used in integration tests
pub fn pairs(results: &[ScoredDocument]) -> Vec<(DocumentId, usize)> {
    results
        .iter()
        .map(|doc| (doc.document_id, doc.relevance))
        .collect()
}
