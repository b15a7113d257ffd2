use jiff::Timestamp;
use serde_json::json;

use forge_core::models::{FormType, SubmissionRecord, SubmissionStatus, ValidationSummary};
use forge_export::{export_all, export_submission};

fn record(id: &str) -> SubmissionRecord {
    let payload = json!({
        "diseaseOverview": { "diseaseName": { "clinical": "Dengue Fever" } }
    });
    SubmissionRecord {
        submission_id: id.to_string(),
        collaborator_id: "uid-1".to_string(),
        form_type: FormType::ComprehensiveParameterValidation,
        status: SubmissionStatus::Approved,
        submitted_at: "2026-08-01T10:00:00Z".parse().unwrap(),
        version: "1.0".to_string(),
        validation: ValidationSummary {
            overall_score: 11,
            missing_sections: vec![],
            parameter_validation_score: None,
            data_completeness_score: None,
            clinical_relevance_score: None,
            implementation_readiness_score: None,
        },
        search_index: vec!["dengue".to_string(), "fever".to_string()],
        payload: payload.as_object().unwrap().clone(),
    }
}

fn export_time() -> Timestamp {
    "2026-08-29T15:30:00Z".parse().unwrap()
}

#[test]
fn single_export_filename_and_stamp() {
    let export = export_submission(&record("abc123"), "admin@example.com", export_time()).unwrap();
    assert_eq!(export.filename, "submission-abc123-2026-08-29.json");

    let body: serde_json::Value = serde_json::from_slice(&export.bytes).unwrap();
    assert_eq!(body["exportedBy"], "admin@example.com");
    assert!(body["exportDate"].as_str().unwrap().starts_with("2026-08-29"));
    // Original record fields survive alongside the stamp.
    assert_eq!(body["submissionId"], "abc123");
    assert_eq!(body["status"], "approved");
    assert_eq!(
        body["diseaseOverview"]["diseaseName"]["clinical"],
        "Dengue Fever"
    );
}

#[test]
fn batch_export_wraps_records_with_count() {
    let records = vec![record("a1"), record("b2")];
    let export = export_all(&records, "admin@example.com", export_time()).unwrap();
    assert_eq!(export.filename, "all-submissions-2026-08-29.json");

    let body: serde_json::Value = serde_json::from_slice(&export.bytes).unwrap();
    assert_eq!(body["recordCount"], 2);
    assert_eq!(body["exportedBy"], "admin@example.com");
    assert_eq!(body["submissions"].as_array().unwrap().len(), 2);
    assert_eq!(body["submissions"][0]["submissionId"], "a1");
}

#[test]
fn empty_batch_still_exports() {
    let export = export_all(&[], "admin@example.com", export_time()).unwrap();
    let body: serde_json::Value = serde_json::from_slice(&export.bytes).unwrap();
    assert_eq!(body["recordCount"], 0);
    assert_eq!(body["submissions"].as_array().unwrap().len(), 0);
}
