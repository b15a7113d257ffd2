//! forge-export
//!
//! Admin download blobs: one submission or a filtered batch as
//! pretty-printed JSON, stamped with who exported it and when. The
//! filename patterns are part of the admin tooling's expectations.

pub mod error;

use jiff::Timestamp;
use tracing::info;

use forge_core::models::SubmissionRecord;

pub use error::ExportError;

/// A ready-to-download blob.
#[derive(Debug, Clone)]
pub struct Export {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Export one submission as `submission-{id}-{YYYY-MM-DD}.json`, with
/// `exportDate` and `exportedBy` appended to the record.
pub fn export_submission(
    record: &SubmissionRecord,
    exported_by: &str,
    exported_at: Timestamp,
) -> Result<Export, ExportError> {
    let mut body = match serde_json::to_value(record)? {
        serde_json::Value::Object(map) => map,
        // A record always serializes to an object.
        other => {
            return Err(ExportError::UnexpectedShape(other.to_string()));
        }
    };
    stamp(&mut body, exported_by, exported_at);

    let filename = format!(
        "submission-{}-{}.json",
        record.submission_id,
        file_date(exported_at)
    );
    let bytes = serde_json::to_vec_pretty(&body)?;
    info!(filename = %filename, "submission exported");
    Ok(Export { filename, bytes })
}

/// Export a filtered batch as `all-submissions-{YYYY-MM-DD}.json`.
pub fn export_all(
    records: &[SubmissionRecord],
    exported_by: &str,
    exported_at: Timestamp,
) -> Result<Export, ExportError> {
    let mut body = serde_json::Map::new();
    body.insert(
        "recordCount".to_string(),
        serde_json::Value::from(records.len()),
    );
    body.insert(
        "submissions".to_string(),
        serde_json::to_value(records)?,
    );
    stamp(&mut body, exported_by, exported_at);

    let filename = format!("all-submissions-{}.json", file_date(exported_at));
    let bytes = serde_json::to_vec_pretty(&body)?;
    info!(filename = %filename, count = records.len(), "batch exported");
    Ok(Export { filename, bytes })
}

fn stamp(body: &mut serde_json::Map<String, serde_json::Value>, exported_by: &str, at: Timestamp) {
    body.insert(
        "exportDate".to_string(),
        serde_json::Value::String(at.to_string()),
    );
    body.insert(
        "exportedBy".to_string(),
        serde_json::Value::String(exported_by.to_string()),
    );
}

fn file_date(at: Timestamp) -> String {
    at.strftime("%Y-%m-%d").to_string()
}
