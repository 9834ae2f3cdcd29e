//! Text analysis: word splitting and stop-word filtering.
//!
//! Words are maximal runs of non-space characters taken exactly
//! as found. There is no case folding and no punctuation
//! stripping, so `Cat`, `cat` and `cat,` are three distinct words.

mod stop_words;
mod tokenizer;

pub use stop_words::StopWords;
pub use tokenizer::{split_into_words, WORD_SEPARATOR};
