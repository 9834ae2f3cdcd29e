//! Tests for the search CLI command
//!
//! Feeds the line protocol through the search handler:
//! - Ranked result lines
//! - Result limits and --all
//! - JSON output
//! - Malformed input

use crate::cli::test_helpers::{run_search, run_search_err};
use crate::common::{pets_corpus, protocol_input, PETS_STOP_WORDS};
use docsearch::cli::OutputFormat;
use docsearch::core::types::SearchResponse;

/// Stop words, one document, one query
#[test]
fn test_search_single_match() {
    let input = protocol_input("a the", &["a cat sat"], "cat");
    let out = run_search(&input, 5, false, OutputFormat::Human);
    assert_eq!(out, "{ document_id = 0, relevance = 1 }\n");
}

#[test]
fn test_search_minus_word() {
    let input = protocol_input("", &["cat dog", "dog bird"], "dog -cat");
    let out = run_search(&input, 5, false, OutputFormat::Human);
    assert_eq!(out, "{ document_id = 1, relevance = 1 }\n");
}

#[test]
fn test_search_ranked_lines() {
    let input = protocol_input(PETS_STOP_WORDS, &pets_corpus(), "fluffy groomed cat");
    let out = run_search(&input, 3, false, OutputFormat::Human);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "{ document_id = 1, relevance = 2 }",
            "{ document_id = 0, relevance = 1 }",
            "{ document_id = 2, relevance = 1 }",
        ]
    );
}

#[test]
fn test_search_all_ignores_limit() {
    let input = protocol_input(PETS_STOP_WORDS, &pets_corpus(), "fluffy groomed cat");
    let out = run_search(&input, 1, true, OutputFormat::Human);
    assert_eq!(out.lines().count(), 5);
}

#[test]
fn test_search_all_json_output() {
    let input = protocol_input(PETS_STOP_WORDS, &pets_corpus(), "fluffy groomed cat");
    let out = run_search(&input, 1, true, OutputFormat::Json);

    let response: SearchResponse = serde_json::from_str(&out).expect("Valid JSON response");
    assert_eq!(response.count, 5);
    assert_eq!(response.results.len(), 5);
    assert_eq!(response.results[0].document_id, 1);
    assert_eq!(response.results[0].relevance, 2);
}

#[test]
fn test_search_no_results() {
    let input = protocol_input("", &["x y z"], "-x -y -z");
    assert!(run_search(&input, 5, false, OutputFormat::Human).is_empty());
}

#[test]
fn test_search_without_query_line() {
    let out = run_search("\n1\ncat\n", 5, false, OutputFormat::Human);
    assert!(out.is_empty());
}

#[test]
fn test_search_json_output() {
    let input = protocol_input("", &["cat dog", "dog bird"], "dog");
    let out = run_search(&input, 5, false, OutputFormat::Json);

    let response: SearchResponse = serde_json::from_str(&out).expect("Valid JSON response");
    assert_eq!(response.query, "dog");
    assert_eq!(response.count, 2);
    assert_eq!(response.results[0].document_id, 0);
    assert_eq!(response.results[1].document_id, 1);
}

#[test]
fn test_search_malformed_count() {
    let message = run_search_err("a the\nmany\ncat\n");
    assert!(message.contains("invalid document count"), "{message}");
}

#[test]
fn test_search_truncated_documents() {
    let message = run_search_err("\n2\nonly one\n");
    assert!(message.contains("expected 2 documents"), "{message}");
}
