// Invariants checked over a fixed corpus and a spread of queries

use crate::common::{build_server, pets_corpus, PETS_STOP_WORDS};
use docsearch::core::analysis::split_into_words;

const QUERIES: &[&str] = &[
    "cat",
    "cat -collar",
    "fluffy groomed cat",
    "groomed -dog -eugene",
    "a mat collar white tail eyes",
    "-cat -dog",
    "with and on",
    "cat -with",
    "fluffy fluffy fluffy",
    "",
];

fn document_words(text: &str) -> Vec<&str> {
    split_into_words(text).collect()
}

#[test]
fn test_minus_words_never_returned() {
    let corpus = pets_corpus();
    let server = build_server(PETS_STOP_WORDS, &corpus, 5);

    for raw_query in QUERIES {
        let query = server.parse_query(raw_query);
        for doc in server.find_documents(raw_query) {
            let words = document_words(corpus[doc.document_id as usize]);
            assert!(
                !query.minus_words.iter().any(|w| words.contains(&w.as_str())),
                "document {} returned for '{}' despite a minus word",
                doc.document_id,
                raw_query
            );
        }
    }
}

#[test]
fn test_no_plus_words_means_no_results() {
    let server = build_server(PETS_STOP_WORDS, &pets_corpus(), 5);

    for raw_query in QUERIES {
        if server.parse_query(raw_query).plus_words.is_empty() {
            assert!(
                server.find_top_documents(raw_query).is_empty(),
                "'{raw_query}' has no plus words but matched"
            );
        }
    }
}

#[test]
fn test_results_bounded_and_ordered() {
    for k in 1..=6 {
        let server = build_server(PETS_STOP_WORDS, &pets_corpus(), k);

        for raw_query in QUERIES {
            let results = server.find_top_documents(raw_query);
            assert!(results.len() <= k);

            for pair in results.windows(2) {
                let ordered = pair[0].relevance > pair[1].relevance
                    || (pair[0].relevance == pair[1].relevance
                        && pair[0].document_id < pair[1].document_id);
                assert!(ordered, "results for '{raw_query}' out of order: {pair:?}");
            }
        }
    }
}

#[test]
fn test_top_k_is_prefix_of_full_ranking() {
    let server = build_server(PETS_STOP_WORDS, &pets_corpus(), 2);

    for raw_query in QUERIES {
        let top = server.find_top_documents(raw_query);
        let all = server.find_documents(raw_query);
        assert_eq!(top.as_slice(), &all[..top.len()]);
    }
}

#[test]
fn test_relevance_ignores_repetition() {
    let once = build_server("", &["cat"], 5);
    let thrice = build_server("", &["cat cat cat"], 5);

    assert_eq!(
        once.find_top_documents("cat"),
        thrice.find_top_documents("cat")
    );
    assert_eq!(thrice.find_top_documents("cat")[0].relevance, 1);
}

#[test]
fn test_relevance_bounded_by_plus_words() {
    let server = build_server(PETS_STOP_WORDS, &pets_corpus(), 5);

    for raw_query in QUERIES {
        let plus = server.parse_query(raw_query).plus_words.len();
        for doc in server.find_documents(raw_query) {
            assert!(doc.relevance >= 1 && doc.relevance <= plus);
        }
    }
}

#[test]
fn test_stop_word_never_matches_as_plus_term() {
    let server = build_server("cat", &["cat dog", "cat"], 5);

    assert!(server.find_top_documents("cat").is_empty());
    assert!(server.match_document("cat", 1).unwrap().matched_words.is_empty());
}

#[test]
fn test_results_are_deterministic() {
    let first = build_server(PETS_STOP_WORDS, &pets_corpus(), 5);
    let second = build_server(PETS_STOP_WORDS, &pets_corpus(), 5);

    for raw_query in QUERIES {
        assert_eq!(
            first.find_top_documents(raw_query),
            second.find_top_documents(raw_query)
        );
    }
}
