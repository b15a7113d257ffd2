//! Scoring for legacy simple clinical-logic records.
//!
//! Legacy fields are scalars and string arrays rather than the nested
//! section objects of the comprehensive form, so presence here also accepts
//! a non-empty string.

use forge_core::models::ValidationSummary;
use serde_json::Value;

use crate::percentage;

/// The legacy form's core fields, in form order.
pub const FIELD_ORDER: [&str; 6] = [
    "diseaseName",
    "diseaseType",
    "typicalAgeOfOnset",
    "commonSymptoms",
    "diagnosticMethods",
    "treatmentApproach",
];

fn field_is_present(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    }
}

/// Score one legacy payload. Pure and idempotent.
pub fn score(payload: &Value) -> ValidationSummary {
    let obj = payload.as_object();

    let mut missing_sections = Vec::new();
    let mut present = 0usize;
    for name in FIELD_ORDER {
        let filled = obj
            .and_then(|map| map.get(name))
            .is_some_and(field_is_present);
        if filled {
            present += 1;
        } else {
            missing_sections.push(name.to_string());
        }
    }

    let completeness = percentage(present, FIELD_ORDER.len());

    ValidationSummary {
        overall_score: completeness,
        missing_sections,
        parameter_validation_score: None,
        data_completeness_score: Some(completeness),
        clinical_relevance_score: None,
        implementation_readiness_score: None,
    }
}
