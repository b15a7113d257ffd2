use forge_search::{build_index, index_tokens, matches_term};
use serde_json::json;

#[test]
fn tokens_are_lowercase_and_deduplicated() {
    let payload = json!({
        "diseaseOverview": {
            "diseaseName": { "clinical": "Type 2 Diabetes Mellitus", "common": "Diabetes" }
        }
    });
    let index = build_index(&payload);

    assert!(index.contains("diabetes"));
    assert!(index.contains("type"));
    assert!(index.contains("2"));
    assert!(index.contains("mellitus"));
    // "Diabetes" appears twice in the payload but once in the set.
    assert_eq!(index.iter().filter(|t| *t == "diabetes").count(), 1);
    assert!(index.iter().all(|t| *t == t.to_lowercase()));
}

#[test]
fn adding_text_only_grows_the_index() {
    let base = json!({ "notes": "progressive joint stiffness" });
    let extended = json!({
        "notes": "progressive joint stiffness",
        "institution": "AIIMS Delhi"
    });

    let before = build_index(&base);
    let after = build_index(&extended);
    assert!(before.is_subset(&after));
}

#[test]
fn non_string_leaves_are_ignored() {
    let index = build_index(&json!({
        "count": 42,
        "consentGiven": true,
        "missing": null,
        "nested": [ { "stage": "Early" } ]
    }));
    assert_eq!(index.len(), 1);
    assert!(index.contains("early"));
}

#[test]
fn keyword_match_is_case_insensitive_exact_membership() {
    let tokens = index_tokens(&json!({
        "diseaseName": { "clinical": "Type 2 Diabetes Mellitus" }
    }));

    assert!(matches_term(&tokens, "diabetes"));
    assert!(matches_term(&tokens, "DIABETES"));
    assert!(!matches_term(&tokens, "diabet"));
    assert!(!matches_term(&tokens, ""));
    assert!(!matches_term(&tokens, "   "));
}

#[test]
fn stored_tokens_are_sorted_and_stable() {
    let payload = json!({ "b": "zebra apple", "a": "Mango" });
    let tokens = index_tokens(&payload);
    assert_eq!(tokens, vec!["apple", "mango", "zebra"]);
    assert_eq!(tokens, index_tokens(&payload));
}
