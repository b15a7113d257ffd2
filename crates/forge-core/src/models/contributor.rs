use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Denormalized contributor summary shown on the findings pages.
///
/// Never independently authored — rebuilt by aggregating submissions and
/// joining against the contributor's profile.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Contributor {
    pub collaborator_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub submission_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_submission: Option<jiff::Timestamp>,
}
