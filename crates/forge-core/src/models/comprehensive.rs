//! The 18-section comprehensive disease profile.
//!
//! Every section is optional at the type level: physicians submit whatever
//! they can, and the scoring engine reports what is missing. Unknown
//! top-level keys are preserved through a flattened passthrough map so that
//! records written by newer form revisions survive a read-modify-write.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Display fallback when a profile names no disease at all.
pub const UNKNOWN_DISEASE: &str = "Unknown Disease";

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComprehensivePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_overview: Option<DiseaseOverview>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disease_subtypes: Vec<DiseaseSubtype>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genetic_risk_factors: Vec<GeneticRiskFactor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clinical_stages: Vec<ClinicalStage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symptoms_by_stage: Vec<StageSymptoms>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comorbidities: Vec<Comorbidity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medications: Vec<Medication>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub red_flags: Vec<RedFlag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub progression_timeline: Vec<ProgressionEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lifestyle_management: Vec<LifestyleIntervention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pediatric_vs_adult: Option<PediatricVsAdult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lab_values: Vec<LabValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contraindications: Vec<Contraindication>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitoring_requirements: Vec<MonitoringRequirement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub misdiagnoses: Vec<Misdiagnosis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_practices: Option<RegionalPractices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<AdditionalNotes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physician_consent: Option<PhysicianConsent>,
    /// Forward-compatibility passthrough for section keys this build
    /// doesn't know about.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ComprehensivePayload {
    /// Serialize to the raw JSON shape the scoring engine and store use.
    pub fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }

    /// The name shown in lists and dashboards. Prefers the clinical name,
    /// falls back to the common name, then to [`UNKNOWN_DISEASE`].
    pub fn display_name(&self) -> &str {
        self.disease_overview
            .as_ref()
            .and_then(|o| o.disease_name.as_ref())
            .and_then(|n| {
                n.clinical
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .or_else(|| n.common.as_deref().filter(|s| !s.trim().is_empty()))
            })
            .unwrap_or(UNKNOWN_DISEASE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiseaseCategory {
    Acute,
    Chronic,
    Recurrent,
    Congenital,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiseaseName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd10: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiseaseTypeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<DiseaseCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<DiseaseCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiseaseOverview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_name: Option<DiseaseName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_type: Option<DiseaseTypeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_onset_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevalence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiseaseSubtype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_criteria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_treatment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GeneticRiskFactor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_or_marker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalStage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_criteria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_triggers: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StageSymptoms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub major_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub early_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom_prevalence: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Comorbidity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onset_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Medication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_of_treatment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_to_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RedFlag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospitalization_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProgressionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers_for_progression: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LifestyleIntervention {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervention: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_stages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PediatricVsAdult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pediatric_presentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult_presentation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_differences: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LabValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_values: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Contraindication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug_or_procedure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MonitoringRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Misdiagnosis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commonly_mistaken_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_differentiators: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegionalPractices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_diagnosis_methods: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rural_diagnosis_methods: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_medication_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rural_medication_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_to_care_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdditionalNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PhysicianConsent {
    #[serde(default)]
    pub consent_given: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physician_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution_allowed: Option<bool>,
}
