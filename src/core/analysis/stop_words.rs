//! Configured stop-word set.

use crate::core::analysis::tokenizer::split_into_words;
use std::collections::BTreeSet;

/// Words excluded from both indexing and query interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Create an empty stop-word set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a space-separated line. Duplicates collapse.
    pub fn parse(text: &str) -> Self {
        Self {
            words: split_into_words(text).map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split text into words and drop every stop word.
    pub fn split_into_words_no_stop<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        split_into_words(text).filter(move |word| !self.contains(word))
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
