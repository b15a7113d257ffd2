pub mod analytics;
pub mod clinical_logic;
pub mod comprehensive;
pub mod contributor;
pub mod profile;
pub mod record;
pub mod validation;

pub use record::{FormType, SubmissionRecord, SubmissionStatus};
pub use validation::ValidationSummary;
