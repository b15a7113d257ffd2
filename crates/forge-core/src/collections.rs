//! Collection names and document key conventions.
//!
//! Pure string functions — no SDK dependency. Collection names match the
//! original deployment so existing stored data stays addressable.

/// Contributor profiles, one per authenticated user.
pub const USERS: &str = "users";

/// 18-section comprehensive disease profiles.
pub const COMPREHENSIVE: &str = "comprehensiveParameterValidation";

/// Expert assessments of the clinical decision model.
pub const ANALYTICS: &str = "advancedClinicalAnalytics";

/// Legacy simple clinical-logic submissions.
pub const CLINICAL_LOGIC: &str = "clinicalLogic";

/// Denormalized contributor summaries, rebuilt by aggregation.
pub const CONTRIBUTORS: &str = "contributors";

/// Object key for one document in a collection.
pub fn document(collection: &str, id: &str) -> String {
    format!("{collection}/{id}.json")
}

/// Key prefix covering every document in a collection.
pub fn prefix(collection: &str) -> String {
    format!("{collection}/")
}
