//! Scoring for the 18-section comprehensive disease profile.

use forge_core::models::ValidationSummary;
use serde_json::Value;

use crate::{percentage, section_is_present};

/// The canonical section order. `missing_sections` always reports absent
/// sections in this order, matching the form's layout.
pub const SECTION_ORDER: [&str; 18] = [
    "diseaseOverview",
    "diseaseSubtypes",
    "geneticRiskFactors",
    "clinicalStages",
    "symptomsByStage",
    "comorbidities",
    "medications",
    "redFlags",
    "progressionTimeline",
    "lifestyleManagement",
    "pediatricVsAdult",
    "labValues",
    "contraindications",
    "monitoringRequirements",
    "misdiagnoses",
    "regionalPractices",
    "additionalNotes",
    "physicianConsent",
];

/// Sections that carry the structured parameters downstream models consume.
/// `parameter_validation_score` is their completeness share.
const PARAMETER_SECTIONS: [&str; 6] = [
    "clinicalStages",
    "symptomsByStage",
    "medications",
    "redFlags",
    "labValues",
    "monitoringRequirements",
];

// Heuristic weights for `clinical_relevance_score` (sum to 100). These are
// a documented implementation choice, not a stored-data compatibility
// surface; only the 0-100 scale and ordering are load-bearing.
const RELEVANCE_OVERVIEW_WEIGHT: u32 = 20;
const RELEVANCE_CONSENT_WEIGHT: u32 = 20;
const RELEVANCE_PARAMETER_WEIGHT: u32 = 60;

/// Score one comprehensive payload.
///
/// `overall_score` is strict completeness: `round(100 * present / 18)`,
/// where presence means a non-empty object or non-empty array under the
/// canonical section key. Idempotent and pure.
pub fn score(payload: &Value) -> ValidationSummary {
    let obj = payload.as_object();

    let mut missing_sections = Vec::new();
    let mut present = 0usize;
    let mut parameters_present = 0usize;

    for name in SECTION_ORDER {
        let filled = obj
            .and_then(|map| map.get(name))
            .is_some_and(section_is_present);
        if filled {
            present += 1;
            if PARAMETER_SECTIONS.contains(&name) {
                parameters_present += 1;
            }
        } else {
            missing_sections.push(name.to_string());
        }
    }

    let overall_score = percentage(present, SECTION_ORDER.len());
    let parameter_validation_score = percentage(parameters_present, PARAMETER_SECTIONS.len());

    let overview_filled = !missing_sections.iter().any(|s| s == "diseaseOverview");
    let consent_filled = !missing_sections.iter().any(|s| s == "physicianConsent");

    let relevance = u32::from(overview_filled) * RELEVANCE_OVERVIEW_WEIGHT
        + u32::from(consent_filled) * RELEVANCE_CONSENT_WEIGHT
        + (u32::from(parameter_validation_score) * RELEVANCE_PARAMETER_WEIGHT) / 100;

    ValidationSummary {
        overall_score,
        missing_sections,
        parameter_validation_score: Some(parameter_validation_score),
        data_completeness_score: Some(overall_score),
        clinical_relevance_score: Some(relevance as u8),
        implementation_readiness_score: None,
    }
}
