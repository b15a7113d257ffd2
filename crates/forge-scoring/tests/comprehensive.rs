use forge_core::models::comprehensive::{
    ComprehensivePayload, DiseaseName, DiseaseOverview, PhysicianConsent,
};
use forge_scoring::comprehensive::{score, SECTION_ORDER};
use serde_json::json;

/// A payload with every one of the 18 sections filled in.
fn full_payload() -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    for name in SECTION_ORDER {
        // Arrays and objects are both valid section shapes; alternate.
        let value = if name.ends_with('s') && name != "additionalNotes" {
            json!([{ "notes": "filled" }])
        } else {
            json!({ "notes": "filled" })
        };
        obj.insert(name.to_string(), value);
    }
    serde_json::Value::Object(obj)
}

#[test]
fn all_sections_present_scores_100() {
    let summary = score(&full_payload());
    assert_eq!(summary.overall_score, 100);
    assert!(summary.missing_sections.is_empty());
}

#[test]
fn two_of_eighteen_sections_scores_11() {
    let overview = DiseaseOverview {
        disease_name: Some(DiseaseName {
            clinical: Some("Type 2 Diabetes Mellitus".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let payload = ComprehensivePayload {
        disease_overview: Some(overview),
        physician_consent: Some(PhysicianConsent {
            consent_given: true,
            physician_name: Some("Dr. Rao".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let summary = score(&payload.to_value().unwrap());
    assert_eq!(summary.missing_sections.len(), 16);
    assert_eq!(summary.overall_score, 11);
    assert!(!summary.missing_sections.contains(&"diseaseOverview".to_string()));
    assert!(!summary.missing_sections.contains(&"physicianConsent".to_string()));
}

#[test]
fn missing_sections_preserve_canonical_order() {
    let payload = json!({
        "medications": [{ "drugClass": "biguanide" }],
        "diseaseOverview": { "description": "chronic metabolic disease" },
    });
    let summary = score(&payload);

    let expected: Vec<String> = SECTION_ORDER
        .iter()
        .filter(|name| **name != "medications" && **name != "diseaseOverview")
        .map(|name| name.to_string())
        .collect();
    assert_eq!(summary.missing_sections, expected);
}

#[test]
fn empty_containers_count_as_missing() {
    let payload = json!({
        "diseaseOverview": {},
        "medications": [],
        "labValues": null,
        "additionalNotes": "free text is not a section object",
    });
    let summary = score(&payload);
    assert_eq!(summary.overall_score, 0);
    assert_eq!(summary.missing_sections.len(), 18);
}

#[test]
fn non_object_payload_scores_zero() {
    let summary = score(&json!(null));
    assert_eq!(summary.overall_score, 0);
    assert_eq!(summary.missing_sections.len(), 18);
}

#[test]
fn scoring_is_pure() {
    let payload = full_payload();
    assert_eq!(score(&payload), score(&payload));
}

#[test]
fn auxiliary_scores_stay_in_range_and_track_completeness() {
    let sparse = score(&json!({ "diseaseOverview": { "description": "x" } }));
    let full = score(&full_payload());

    for summary in [&sparse, &full] {
        assert!(summary.parameter_validation_score.unwrap() <= 100);
        assert!(summary.clinical_relevance_score.unwrap() <= 100);
    }
    assert!(full.clinical_relevance_score >= sparse.clinical_relevance_score);
    assert_eq!(full.data_completeness_score, Some(100));
}
