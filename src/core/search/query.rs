//! Query parsing into plus and minus word sets.
//!
//! A query is a bag of words. Words starting with the minus
//! marker must not appear in a matching document; every other
//! word adds one point of relevance when present.

use crate::core::analysis::StopWords;
use std::collections::BTreeSet;

/// Default character marking an excluded word
pub const DEFAULT_MINUS_MARKER: char = '-';

/// Parsed query with disjoint plus and minus word sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// True when no document can match
    pub fn has_no_plus_words(&self) -> bool {
        self.plus_words.is_empty()
    }

    fn add_plus_word(&mut self, word: &str) {
        if !self.minus_words.contains(word) {
            self.plus_words.insert(word.to_string());
        }
    }

    // Exclusion wins over inclusion regardless of word order.
    fn add_minus_word(&mut self, word: &str) {
        self.plus_words.remove(word);
        self.minus_words.insert(word.to_string());
    }
}

/// Parses raw query text against the index's stop words
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<'a> {
    stop_words: &'a StopWords,
    minus_marker: char,
}

impl<'a> QueryParser<'a> {
    pub fn new(stop_words: &'a StopWords, minus_marker: char) -> Self {
        Self {
            stop_words,
            minus_marker,
        }
    }

    /// Parse a query string.
    ///
    /// Stop words are dropped before classification. A bare marker
    /// and a marker followed by a stop word are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use docsearch::core::analysis::StopWords;
    /// use docsearch::core::search::QueryParser;
    ///
    /// let stop_words = StopWords::parse("the");
    /// let query = QueryParser::new(&stop_words, '-').parse("the dog -cat");
    ///
    /// assert!(query.plus_words.contains("dog"));
    /// assert!(query.minus_words.contains("cat"));
    /// assert!(!query.plus_words.contains("the"));
    /// ```
    pub fn parse(&self, raw_query: &str) -> Query {
        let mut query = Query::default();

        for word in self.stop_words.split_into_words_no_stop(raw_query) {
            match word.strip_prefix(self.minus_marker) {
                Some("") => {
                    tracing::warn!("Ignoring bare minus marker in query");
                }
                Some(excluded) if self.stop_words.contains(excluded) => {
                    tracing::debug!(word = excluded, "Ignoring excluded stop word");
                }
                Some(excluded) => query.add_minus_word(excluded),
                None => query.add_plus_word(word),
            }
        }

        tracing::debug!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            "Parsed query"
        );
        query
    }
}
