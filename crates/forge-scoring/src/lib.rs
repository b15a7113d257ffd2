//! forge-scoring
//!
//! Pure validation/scoring engine, one module per submission kind. Scores
//! are computed from the raw JSON payload so that records of any vintage
//! score identically, and every weight lives here as a named constant
//! instead of inline arithmetic scattered across call sites.

pub mod analytics;
pub mod clinical_logic;
pub mod comprehensive;

use forge_core::models::{FormType, ValidationSummary};
use serde_json::Value;

/// Dispatch to the scoring module for a submission kind.
pub fn score_for(form_type: FormType, payload: &Value) -> ValidationSummary {
    match form_type {
        FormType::ComprehensiveParameterValidation => comprehensive::score(payload),
        FormType::AdvancedClinicalAnalytics => analytics::score(payload),
        FormType::ClinicalLogic => clinical_logic::score(payload),
    }
}

/// A JSON value counts as a filled-in form section only when it is a
/// non-empty object or non-empty array. Scalars, nulls, and empty
/// containers all read as missing.
pub(crate) fn section_is_present(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

/// Round a ratio to an integer percentage on the 0–100 scale.
pub(crate) fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u8
}
