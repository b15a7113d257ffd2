//! Advanced clinical analytics: a physician's structured assessment of the
//! clinical decision model itself, not a disease profile.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalyticsPayload {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decision_models: Vec<DecisionModel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_points: Vec<CriticalPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflict_zones: Vec<ConflictZone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback_loops: Vec<FeedbackLoop>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_assessment: Option<OverallAssessment>,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalyticsPayload {
    pub fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DecisionModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_impact: Option<ImpactLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sufficient: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CriticalPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_impact: Option<ImpactLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConflictZone {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeedbackLoop {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement: Option<String>,
}

/// Per-section quality rating of the decision-model form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    /// 1 (poor) through 5 (excellent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_relevance: Option<ImpactLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OverallAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_sections: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_missing_elements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_relevance: Option<ImpactLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_readiness: Option<ImpactLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
