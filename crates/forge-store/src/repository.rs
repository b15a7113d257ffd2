//! Typed read/write operations over the document store for the three
//! submission kinds. The repository exclusively owns the derived
//! `validation` and `searchIndex` fields; callers own the payload.

use serde_json::Value;
use tracing::{info, warn};

use forge_core::models::record::{new_submission_id, RECORD_VERSION};
use forge_core::models::{FormType, SubmissionRecord, SubmissionStatus};

use crate::document::DocumentStore;
use crate::error::{RepositoryError, StoreError};

/// Envelope fields the repository stamps onto every record. If a payload
/// carries any of these keys they are dropped, so the envelope always wins
/// the flatten merge.
const ENVELOPE_KEYS: [&str; 8] = [
    "submissionId",
    "collaboratorId",
    "formType",
    "status",
    "submittedAt",
    "version",
    "validation",
    "searchIndex",
];

pub struct SubmissionRepository<S> {
    store: S,
}

impl<S: DocumentStore> SubmissionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a new submission: assign an id, compute validation scores
    /// and the search index, stamp metadata, write one document. No
    /// internal retry — a failed write surfaces to the caller with the
    /// entered data intact.
    pub async fn submit(
        &self,
        form_type: FormType,
        payload: Value,
        collaborator_id: &str,
    ) -> Result<String, RepositoryError> {
        let Value::Object(mut payload) = payload else {
            return Err(RepositoryError::ValidationInput(
                "submission payload must be a JSON object".to_string(),
            ));
        };
        for key in ENVELOPE_KEYS {
            payload.remove(key);
        }

        let payload_value = Value::Object(payload.clone());
        let validation = forge_scoring::score_for(form_type, &payload_value);
        let search_index = forge_search::index_tokens(&payload_value);

        let record = SubmissionRecord {
            submission_id: new_submission_id(),
            collaborator_id: collaborator_id.to_string(),
            form_type,
            status: SubmissionStatus::Submitted,
            submitted_at: jiff::Timestamp::now(),
            version: RECORD_VERSION.to_string(),
            validation,
            search_index,
            payload,
        };

        let document = serde_json::to_value(&record)?;
        self.store
            .put(form_type.collection(), &record.submission_id, &document)
            .await?;

        info!(
            submission_id = %record.submission_id,
            collaborator_id = collaborator_id,
            form_type = ?form_type,
            overall_score = record.validation.overall_score,
            "submission stored"
        );
        Ok(record.submission_id)
    }

    pub async fn get_submission(
        &self,
        form_type: FormType,
        id: &str,
    ) -> Result<SubmissionRecord, RepositoryError> {
        match self.store.get(form_type.collection(), id).await {
            Ok(doc) => Ok(serde_json::from_value(doc.value)?),
            Err(StoreError::NotFound { .. }) => {
                Err(RepositoryError::NotFound { id: id.to_string() })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// One collaborator's submissions, most recent first.
    pub async fn get_user_submissions(
        &self,
        form_type: FormType,
        collaborator_id: &str,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let mut records = self.load_collection(form_type).await?;
        records.retain(|r| r.collaborator_id == collaborator_id);
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Approved submissions only, most recent first, bounded by `limit`.
    pub async fn get_approved_submissions(
        &self,
        form_type: FormType,
        limit: usize,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let mut records = self.load_collection(form_type).await?;
        records.retain(|r| r.status == SubmissionStatus::Approved);
        sort_newest_first(&mut records);
        records.truncate(limit);
        Ok(records)
    }

    /// Keyword lookup over the stored token index.
    pub async fn search_by_keywords(
        &self,
        form_type: FormType,
        term: &str,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let mut records = self.load_collection(form_type).await?;
        records.retain(|r| forge_search::matches_term(&r.search_index, term));
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Every submission of a kind. Admin-only; no pagination contract, so
    /// callers cap what they render.
    pub async fn get_all_submissions(
        &self,
        form_type: FormType,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let mut records = self.load_collection(form_type).await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Admin status transition. The write is revision-guarded so two
    /// concurrent reviewers can't silently overwrite each other.
    pub async fn update_status(
        &self,
        form_type: FormType,
        id: &str,
        next: SubmissionStatus,
    ) -> Result<SubmissionRecord, RepositoryError> {
        let stored = match self.store.get(form_type.collection(), id).await {
            Ok(doc) => doc,
            Err(StoreError::NotFound { .. }) => {
                return Err(RepositoryError::NotFound { id: id.to_string() });
            }
            Err(e) => return Err(e.into()),
        };

        let mut record: SubmissionRecord = serde_json::from_value(stored.value)?;
        if !record.status.can_transition_to(next) {
            return Err(RepositoryError::InvalidTransition {
                from: record.status,
                to: next,
            });
        }
        record.status = next;

        let document = serde_json::to_value(&record)?;
        self.store
            .put_if_match(form_type.collection(), id, &document, &stored.revision)
            .await?;

        info!(submission_id = id, status = ?next, "submission status updated");
        Ok(record)
    }

    async fn load_collection(
        &self,
        form_type: FormType,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let documents = self.store.list(form_type.collection()).await?;
        let mut records = Vec::with_capacity(documents.len());
        for doc in documents {
            match serde_json::from_value::<SubmissionRecord>(doc.value) {
                Ok(record) => records.push(record),
                // A malformed document shouldn't take down every listing.
                Err(e) => warn!(form_type = ?form_type, error = %e, "skipping malformed record"),
            }
        }
        Ok(records)
    }
}

fn sort_newest_first(records: &mut [SubmissionRecord]) {
    records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
}
