//! Legacy simple clinical-logic records. Kept readable and writable for
//! data already in the `clinicalLogic` collection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalLogicPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_age_of_onset: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostic_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_approach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ClinicalLogicPayload {
    pub fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}
