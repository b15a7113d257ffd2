use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Derived completeness and quality scores for one submission.
///
/// Written by the repository at submit time, never hand-edited. All scores
/// are 0–100; higher means more complete or higher quality. Only
/// `overall_score` and `missing_sections` carry hard compatibility
/// guarantees — the auxiliary scores are documented heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidationSummary {
    pub overall_score: u8,
    pub missing_sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_validation_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_completeness_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_relevance_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_readiness_score: Option<u8>,
}
