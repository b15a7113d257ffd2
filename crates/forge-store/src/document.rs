use serde_json::Value;

use crate::error::StoreError;

/// A document read from the store, with its revision tag for optimistic
/// locking (the S3 backend uses ETags; the in-memory backend a counter).
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub value: Value,
    pub revision: String,
}

/// Generic document persistence addressed by collection name and id.
///
/// One JSON document per (collection, id). Writes to a single document are
/// atomic; there are no cross-document transactions, and none are needed —
/// every submission is written as one document.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Write a document unconditionally. Returns the new revision.
    async fn put(&self, collection: &str, id: &str, value: &Value) -> Result<String, StoreError>;

    /// Write a document only if its current revision matches.
    /// `StoreError::PreconditionFailed` on conflict.
    async fn put_if_match(
        &self,
        collection: &str,
        id: &str,
        value: &Value,
        expected_revision: &str,
    ) -> Result<String, StoreError>;

    /// Fetch one document. `StoreError::NotFound` if the id is absent.
    async fn get(&self, collection: &str, id: &str) -> Result<StoredDocument, StoreError>;

    /// Fetch every document in a collection. Field-level querying is the
    /// caller's concern; the original system filters lists in memory too.
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;
}

// Repository and profile service can share one store behind an Arc.
impl<T: DocumentStore> DocumentStore for std::sync::Arc<T> {
    async fn put(&self, collection: &str, id: &str, value: &Value) -> Result<String, StoreError> {
        (**self).put(collection, id, value).await
    }

    async fn put_if_match(
        &self,
        collection: &str,
        id: &str,
        value: &Value,
        expected_revision: &str,
    ) -> Result<String, StoreError> {
        (**self)
            .put_if_match(collection, id, value, expected_revision)
            .await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<StoredDocument, StoreError> {
        (**self).get(collection, id).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        (**self).list(collection).await
    }
}
