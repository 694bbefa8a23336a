//! Reply generation: greeting short-circuit, then keyword search, then a
//! fixed fallback.

use crate::greeting::GreetingTable;
use crate::models::Document;
use crate::search::keyword_search;

/// How many documents the search step retrieves.
const SEARCH_TOP_K: usize = 3;
/// Snippet length in characters. Truncation is a raw character count, not
/// word-aligned; mid-word cuts are expected and kept for compatibility.
const SNIPPET_CHARS: usize = 200;

pub const FALLBACK_REPLY: &str =
    "I'm not sure how to help with that. Could you please rephrase your question?";

/// Produce the reply for a query. Total: any input string yields some
/// reply. Greetings never touch the document collection.
pub fn generate_response(
    query: &str,
    greetings: &GreetingTable,
    documents: &[Document],
) -> String {
    if let Some(reply) = greetings.match_greeting(query) {
        return reply.to_string();
    }

    let hits = keyword_search(query, documents, SEARCH_TOP_K);

    match hits.first() {
        Some(best) => {
            let snippet: String = best.chars().take(SNIPPET_CHARS).collect();
            format!("Based on the available information: {snippet}...")
        }
        None => FALLBACK_REPLY.to_string(),
    }
}
