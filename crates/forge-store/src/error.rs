use forge_core::models::SubmissionStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {key}")]
    NotFound { key: String },

    #[error("precondition failed for key: {key}")]
    PreconditionFailed { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store get error: {0}")]
    Get(String),

    #[error("store put error: {0}")]
    Put(String),

    #[error("store list error: {0}")]
    List(String),

    #[error("store config error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("submission not found: {id}")]
    NotFound { id: String },

    #[error("invalid submission payload: {0}")]
    ValidationInput(String),

    #[error("illegal status transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("stored record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
