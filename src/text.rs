//! Text canonicalization and tokenization.
//!
//! Two deliberately separate tokenizations live here:
//!
//! - Query text goes through [`normalize`] (lowercase, strip punctuation,
//!   trim) and is then split on whitespace. `"don't"` becomes `dont`.
//! - Document content is only lowercased and scanned for `\w+` runs.
//!   `"don't"` becomes `don` and `t`.
//!
//! Keeping them as two functions keeps the mismatch visible instead of
//! hiding it inside a shared helper.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Canonicalize a query for matching: lowercase, drop every character that
/// is not a word character or whitespace, then trim. Pure and idempotent;
/// empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    STRIP_RE.replace_all(&lowered, "").trim().to_string()
}

/// Distinct words of a normalized query. Duplicates collapse because
/// overlap scoring counts distinct shared words, not frequency.
pub fn query_words(query: &str) -> HashSet<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Distinct lowercase `\w+` tokens of a document's content. Content is not
/// run through [`normalize`]; word-boundary extraction is enough here.
pub fn content_words(content: &str) -> HashSet<String> {
    let lowered = content.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Hi!!!"), "hi");
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Hello, World  "), "hello world");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!."), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["Hi!!!", "  Hello, World  ", "hi .", "what's up?", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_normalize_keeps_internal_whitespace() {
        assert_eq!(normalize("what is  your   name"), "what is  your   name");
    }

    #[test]
    fn test_query_words_collapse_duplicates() {
        let words = query_words("dogs dogs DOGS!");
        assert_eq!(words.len(), 1);
        assert!(words.contains("dogs"));
    }

    #[test]
    fn test_content_words_extracts_word_runs() {
        let words = content_words("Cats, dogs & birds.");
        assert_eq!(words.len(), 3);
        assert!(words.contains("cats"));
        assert!(words.contains("dogs"));
        assert!(words.contains("birds"));
    }

    #[test]
    fn test_apostrophe_tokenization_differs_by_side() {
        // Query side: "don't" normalizes to a single word "dont".
        let q = query_words("don't");
        assert!(q.contains("dont"));
        // Content side: apostrophe splits the word into two tokens.
        let c = content_words("don't");
        assert!(c.contains("don"));
        assert!(c.contains("t"));
    }
}
