//! Read-only search service over a built index.

use crate::core::analysis::StopWords;
use crate::core::config::SearchConfig;
use crate::core::error::{Result, SearchError};
use crate::core::index::InvertedIndex;
use crate::core::search::matcher::Matcher;
use crate::core::search::query::{Query, QueryParser};
use crate::core::search::top_k::{rank, TopKSelector};
use crate::core::types::{DocumentId, DocumentMatch, ScoredDocument, SearchResponse};
use std::time::Instant;

/// Serving phase of the engine.
///
/// Created by [`crate::core::index::IndexBuilder::build`]; holds no
/// interior mutability, so it can be shared across threads behind
/// an `Arc`.
#[derive(Debug, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    config: SearchConfig,
    selector: TopKSelector,
}

impl SearchServer {
    pub(crate) fn new(stop_words: StopWords, index: InvertedIndex, config: SearchConfig) -> Self {
        let selector = TopKSelector::new(config.max_results);
        Self {
            stop_words,
            index,
            config,
            selector,
        }
    }

    /// Parse a raw query with this server's stop words and marker
    pub fn parse_query(&self, raw_query: &str) -> Query {
        QueryParser::new(&self.stop_words, self.config.minus_marker).parse(raw_query)
    }

    /// Best `max_results` documents for a query
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        let query = self.parse_query(raw_query);
        self.selector.select(Matcher::new(&self.index).score(&query))
    }

    /// Every matching document, ranked, without truncation
    pub fn find_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        let query = self.parse_query(raw_query);
        rank(Matcher::new(&self.index).score(&query))
    }

    /// Execute a query and wrap the top results with timing
    pub fn search(&self, raw_query: &str) -> SearchResponse {
        self.timed_search(raw_query, Self::find_top_documents)
    }

    /// Like [`SearchServer::search`], but with every match
    pub fn search_all(&self, raw_query: &str) -> SearchResponse {
        self.timed_search(raw_query, Self::find_documents)
    }

    fn timed_search<F>(&self, raw_query: &str, find: F) -> SearchResponse
    where
        F: Fn(&Self, &str) -> Vec<ScoredDocument>,
    {
        let start = Instant::now();
        let results = find(self, raw_query);
        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(count, duration_ms, "Search completed");

        SearchResponse {
            query: raw_query.to_string(),
            results,
            count,
            duration_ms,
        }
    }

    /// Plus words of the query that a document contains.
    ///
    /// The list is empty if the document contains a minus word.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocumentId,
    ) -> Result<DocumentMatch> {
        if !self.index.has_document(document_id) {
            return Err(SearchError::DocumentNotFound(document_id));
        }

        let query = self.parse_query(raw_query);
        Ok(DocumentMatch {
            document_id,
            matched_words: Matcher::new(&self.index).matched_words(&query, document_id),
        })
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
