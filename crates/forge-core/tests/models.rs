use serde_json::json;

use forge_core::models::comprehensive::{
    ComprehensivePayload, DiseaseName, DiseaseOverview, UNKNOWN_DISEASE,
};
use forge_core::models::{FormType, SubmissionRecord, SubmissionStatus};

#[test]
fn display_name_prefers_clinical_then_common() {
    let mut payload = ComprehensivePayload {
        disease_overview: Some(DiseaseOverview {
            disease_name: Some(DiseaseName {
                clinical: Some("Type 2 Diabetes Mellitus".to_string()),
                common: Some("Diabetes".to_string()),
                icd10: None,
            }),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(payload.display_name(), "Type 2 Diabetes Mellitus");

    let overview = payload.disease_overview.as_mut().unwrap();
    overview.disease_name.as_mut().unwrap().clinical = None;
    assert_eq!(payload.display_name(), "Diabetes");
}

#[test]
fn display_name_falls_back_for_unnamed_diseases() {
    assert_eq!(ComprehensivePayload::default().display_name(), UNKNOWN_DISEASE);

    // Whitespace-only names don't count either.
    let payload = ComprehensivePayload {
        disease_overview: Some(DiseaseOverview {
            disease_name: Some(DiseaseName {
                clinical: Some("   ".to_string()),
                common: None,
                icd10: None,
            }),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(payload.display_name(), UNKNOWN_DISEASE);
}

#[test]
fn empty_payload_serializes_to_an_empty_object() {
    // skip_serializing_if keeps untouched sections off the wire, which is
    // what the scoring engine's presence test relies on.
    let value = ComprehensivePayload::default().to_value().unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn unknown_section_keys_survive_a_round_trip() {
    let raw = json!({
        "diseaseOverview": { "description": "x" },
        "futureSection": { "addedBy": "a newer form revision" }
    });
    let payload: ComprehensivePayload = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(payload.to_value().unwrap(), raw);
}

#[test]
fn record_wire_format_is_camel_case_with_flattened_payload() {
    let raw = json!({
        "submissionId": "abc",
        "collaboratorId": "uid-1",
        "formType": "comprehensive_parameter_validation",
        "status": "under_review",
        "submittedAt": "2026-08-01T10:00:00Z",
        "version": "1.0",
        "validation": { "overallScore": 11, "missingSections": [] },
        "searchIndex": ["diabetes"],
        "diseaseOverview": { "description": "stored before this build" }
    });

    let record: SubmissionRecord = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(record.form_type, FormType::ComprehensiveParameterValidation);
    assert_eq!(record.status, SubmissionStatus::UnderReview);
    assert!(record.payload.contains_key("diseaseOverview"));

    // Writing it back yields the same document.
    assert_eq!(serde_json::to_value(&record).unwrap(), raw);
}

#[test]
fn status_transition_rules() {
    use SubmissionStatus::*;
    assert!(Submitted.can_transition_to(UnderReview));
    assert!(UnderReview.can_transition_to(Approved));
    assert!(UnderReview.can_transition_to(Rejected));
    assert!(Draft.can_transition_to(Submitted));

    assert!(!Submitted.can_transition_to(Approved));
    assert!(!Approved.can_transition_to(Rejected));
    assert!(!Rejected.can_transition_to(Submitted));
    assert!(!UnderReview.can_transition_to(Submitted));
}
