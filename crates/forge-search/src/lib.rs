//! forge-search
//!
//! Keyword index builder for submissions. Walks every string leaf of a
//! payload into a flat set of lowercase whitespace-delimited tokens; the
//! repository stores the tokens on the record and keyword search is plain
//! set membership. No stemming, no stop-words, no ranking.

use std::collections::BTreeSet;

use serde_json::Value;

/// Build the token set for one payload.
///
/// Deterministic: iteration order of the result is lexicographic, so the
/// stored `searchIndex` array is stable across rewrites of the same record.
pub fn build_index(payload: &Value) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    collect_tokens(payload, &mut tokens);
    tokens
}

/// The stored form of the index: the token set as a sorted vector.
pub fn index_tokens(payload: &Value) -> Vec<String> {
    build_index(payload).into_iter().collect()
}

/// Whether a stored token list matches a search term. Matching is
/// case-insensitive exact-token membership, the array-contains semantics
/// the admin search relies on.
pub fn matches_term(index: &[String], term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    !needle.is_empty() && index.iter().any(|token| *token == needle)
}

fn collect_tokens(value: &Value, tokens: &mut BTreeSet<String>) {
    match value {
        Value::String(text) => {
            for word in text.split_whitespace() {
                let token = word.to_lowercase();
                if !token.is_empty() {
                    tokens.insert(token);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_tokens(item, tokens);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_tokens(item, tokens);
            }
        }
        // Numbers, booleans, and nulls are not searchable text.
        _ => {}
    }
}
