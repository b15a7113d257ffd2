//! Scoring for advanced clinical analytics assessments.

use forge_core::models::ValidationSummary;
use serde_json::Value;

use crate::{percentage, section_is_present};

/// The six top-level parts of an analytics assessment, in form order.
pub const PART_ORDER: [&str; 6] = [
    "decisionModels",
    "criticalPoints",
    "conflictZones",
    "feedbackLoops",
    "sections",
    "overallAssessment",
];

// Readiness mixes how many decision models the assessor marked sufficient
// with the overall-assessment readiness rating. Documented heuristic; only
// the 0-100 scale and ordering are load-bearing.
const READINESS_MODEL_WEIGHT: u32 = 70;
const READINESS_ASSESSMENT_WEIGHT: u32 = 30;

/// Score one analytics payload. Pure and idempotent.
pub fn score(payload: &Value) -> ValidationSummary {
    let obj = payload.as_object();

    let mut missing_sections = Vec::new();
    let mut present = 0usize;
    for name in PART_ORDER {
        let filled = obj
            .and_then(|map| map.get(name))
            .is_some_and(section_is_present);
        if filled {
            present += 1;
        } else {
            missing_sections.push(name.to_string());
        }
    }

    let completeness = percentage(present, PART_ORDER.len());

    ValidationSummary {
        overall_score: completeness,
        missing_sections,
        parameter_validation_score: None,
        data_completeness_score: Some(completeness),
        clinical_relevance_score: Some(clinical_relevance(obj)),
        implementation_readiness_score: Some(implementation_readiness(obj)),
    }
}

/// Share of decision models and critical points the assessor rated
/// `clinicalImpact: "high"`. No entries at all scores zero.
fn clinical_relevance(obj: Option<&serde_json::Map<String, Value>>) -> u8 {
    let mut total = 0usize;
    let mut high = 0usize;
    for part in ["decisionModels", "criticalPoints"] {
        let Some(entries) = obj.and_then(|m| m.get(part)).and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            total += 1;
            if entry.get("clinicalImpact").and_then(Value::as_str) == Some("high") {
                high += 1;
            }
        }
    }
    percentage(high, total)
}

fn implementation_readiness(obj: Option<&serde_json::Map<String, Value>>) -> u8 {
    let models = obj
        .and_then(|m| m.get("decisionModels"))
        .and_then(Value::as_array);

    let (sufficient, total) = models.map_or((0, 0), |entries| {
        let sufficient = entries
            .iter()
            .filter(|e| e.get("isSufficient").and_then(Value::as_bool) == Some(true))
            .count();
        (sufficient, entries.len())
    });

    let assessment_rating = obj
        .and_then(|m| m.get("overallAssessment"))
        .and_then(|a| a.get("implementationReadiness"))
        .and_then(Value::as_str);
    let assessment_component: u32 = match assessment_rating {
        Some("high") => 100,
        Some("medium") => 50,
        _ => 0,
    };

    let model_component = u32::from(percentage(sufficient, total));
    let mixed = (model_component * READINESS_MODEL_WEIGHT
        + assessment_component * READINESS_ASSESSMENT_WEIGHT)
        / 100;
    mixed as u8
}
