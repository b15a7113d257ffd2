use forge_scoring::analytics::{score, PART_ORDER};
use forge_scoring::clinical_logic;
use serde_json::json;

fn full_assessment() -> serde_json::Value {
    json!({
        "decisionModels": [
            { "model": "staging", "clinicalImpact": "high", "isSufficient": true },
            { "model": "dosing", "clinicalImpact": "medium", "isSufficient": false },
        ],
        "criticalPoints": [
            { "section": "redFlags", "clinicalImpact": "high" },
        ],
        "conflictZones": [
            { "sections": ["medications", "contraindications"], "conflict": "overlap" },
        ],
        "feedbackLoops": [
            { "sections": ["labValues"], "purpose": "dose titration" },
        ],
        "sections": [
            { "sectionId": "s1", "qualityRating": 4 },
        ],
        "overallAssessment": { "implementationReadiness": "high" },
    })
}

#[test]
fn full_assessment_is_complete() {
    let summary = score(&full_assessment());
    assert_eq!(summary.overall_score, 100);
    assert!(summary.missing_sections.is_empty());
}

#[test]
fn missing_parts_reported_in_form_order() {
    let summary = score(&json!({
        "conflictZones": [{ "conflict": "x" }],
    }));
    assert_eq!(summary.overall_score, 17);
    let expected: Vec<String> = PART_ORDER
        .iter()
        .filter(|name| **name != "conflictZones")
        .map(|name| name.to_string())
        .collect();
    assert_eq!(summary.missing_sections, expected);
}

#[test]
fn relevance_counts_high_impact_entries() {
    // 2 of 3 rated entries are high impact.
    let summary = score(&full_assessment());
    assert_eq!(summary.clinical_relevance_score, Some(67));
}

#[test]
fn relevance_is_zero_without_rated_entries() {
    let summary = score(&json!({ "sections": [{ "qualityRating": 3 }] }));
    assert_eq!(summary.clinical_relevance_score, Some(0));
}

#[test]
fn readiness_mixes_models_and_assessment() {
    // 1 of 2 models sufficient (50 * 0.7) + high assessment (100 * 0.3) = 65.
    let summary = score(&full_assessment());
    assert_eq!(summary.implementation_readiness_score, Some(65));
}

#[test]
fn scoring_is_pure() {
    let payload = full_assessment();
    assert_eq!(score(&payload), score(&payload));
}

#[test]
fn legacy_records_score_on_core_fields() {
    let summary = clinical_logic::score(&json!({
        "diseaseName": "Dengue Fever",
        "diseaseType": "acute",
        "commonSymptoms": ["fever", "rash"],
    }));
    assert_eq!(summary.overall_score, 50);
    assert_eq!(
        summary.missing_sections,
        vec![
            "typicalAgeOfOnset".to_string(),
            "diagnosticMethods".to_string(),
            "treatmentApproach".to_string(),
        ]
    );
}
