use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("record serialized to a non-object value: {0}")]
    UnexpectedShape(String),
}
