//! Search module: query parsing, scoring and ranking.
//!
//! Scores are term-overlap counts computed from the inverted
//! index. Ranking is deterministic: relevance descending, then
//! document id ascending.

mod matcher;
mod query;
mod server;
mod top_k;

pub use matcher::Matcher;
pub use query::{Query, QueryParser, DEFAULT_MINUS_MARKER};
pub use server::SearchServer;
pub use top_k::{rank, TopKSelector, DEFAULT_MAX_RESULTS};
