use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::collections;
use crate::models::validation::ValidationSummary;

/// The persisted envelope for one physician-authored submission.
///
/// The original payload is flattened at the top level of the stored JSON
/// document, with the envelope fields alongside it, so records written by
/// earlier deployments deserialize unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionRecord {
    pub submission_id: String,
    pub collaborator_id: String,
    pub form_type: FormType,
    pub status: SubmissionStatus,
    pub submitted_at: jiff::Timestamp,
    pub version: String,
    pub validation: ValidationSummary,
    pub search_index: Vec<String>,
    #[serde(flatten)]
    #[ts(skip)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// Schema version stamped on every new record.
pub const RECORD_VERSION: &str = "1.0";

/// Generate an opaque unique submission id.
pub fn new_submission_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormType {
    ComprehensiveParameterValidation,
    AdvancedClinicalAnalytics,
    ClinicalLogic,
}

impl FormType {
    /// The document-store collection this kind of submission lives in.
    pub fn collection(self) -> &'static str {
        match self {
            FormType::ComprehensiveParameterValidation => collections::COMPREHENSIVE,
            FormType::AdvancedClinicalAnalytics => collections::ANALYTICS,
            FormType::ClinicalLogic => collections::CLINICAL_LOGIC,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Whether an admin may move a record from `self` to `next`.
    ///
    /// The review pipeline is linear: submitted → under_review →
    /// approved | rejected. Drafts may only be submitted.
    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, next),
            (Draft, Submitted) | (Submitted, UnderReview) | (UnderReview, Approved) | (UnderReview, Rejected)
        )
    }
}
