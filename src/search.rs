//! Keyword-overlap search over the in-memory document collection.
//!
//! The corpus is a few hundred to a few thousand documents, so a linear
//! scan per query is fine; no inverted index, no persistence.

use crate::models::Document;
use crate::text::{content_words, query_words};

/// A candidate produced during scoring. Transient per request; the caller
/// only ever sees the surviving contents.
struct ScoredDocument<'a> {
    score: usize,
    index: usize,
    content: &'a str,
}

/// Score every document by the number of distinct query words it shares
/// and return the contents of the top `k`. Zero-overlap documents are
/// excluded entirely. Ties break by original document order, lower index
/// first.
pub fn keyword_search(query: &str, documents: &[Document], k: usize) -> Vec<String> {
    if documents.is_empty() {
        return Vec::new();
    }
    let query_set = query_words(query);
    if query_set.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<ScoredDocument> = Vec::new();
    for (index, doc) in documents.iter().enumerate() {
        let words = content_words(&doc.content);
        let overlap = query_set.intersection(&words).count();
        if overlap > 0 {
            candidates.push(ScoredDocument {
                score: overlap,
                index,
                content: &doc.content,
            });
        }
    }

    // Explicit secondary key rather than relying on sort stability.
    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));

    candidates
        .into_iter()
        .take(k)
        .map(|c| c.content.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(contents: &[&str]) -> Vec<Document> {
        contents
            .iter()
            .map(|c| Document {
                content: c.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_scoring_and_stable_tie_break() {
        let docs = docs(&["cats and dogs", "dogs and birds", "cats only"]);
        // Doc 0 scores 2; docs 1 and 2 both score 1, doc 1 wins on index.
        let hits = keyword_search("dogs cats", &docs, 2);
        assert_eq!(hits, vec!["cats and dogs", "dogs and birds"]);
    }

    #[test]
    fn test_zero_score_documents_excluded() {
        let docs = docs(&["cats and dogs", "nothing relevant here"]);
        let hits = keyword_search("cats", &docs, 10);
        assert_eq!(hits, vec!["cats and dogs"]);
    }

    #[test]
    fn test_empty_query_and_empty_collection() {
        let some_docs = docs(&["cats and dogs"]);
        assert!(keyword_search("", &some_docs, 3).is_empty());
        assert!(keyword_search("   ", &some_docs, 3).is_empty());
        assert!(keyword_search("dogs", &[], 3).is_empty());
    }

    #[test]
    fn test_duplicate_query_words_count_once() {
        let d = docs(&["dogs are loyal", "dogs dogs dogs and cats"]);
        // "dogs dogs" carries one distinct word, so both docs score 1 and
        // the first wins the tie.
        let hits = keyword_search("dogs dogs", &d, 1);
        assert_eq!(hits, vec!["dogs are loyal"]);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let d = docs(&["Rust is a systems language."]);
        let hits = keyword_search("RUST, systems!", &d, 3);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_k_limits_results() {
        let d = docs(&["dogs a", "dogs b", "dogs c", "dogs d"]);
        assert_eq!(keyword_search("dogs", &d, 2).len(), 2);
    }
}
