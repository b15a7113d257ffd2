//! In-memory document store for tests and local development.

use std::collections::BTreeMap;

use serde_json::Value;
use tokio::sync::Mutex;

use forge_core::collections;

use crate::document::{DocumentStore, StoredDocument};
use crate::error::StoreError;

#[derive(Default)]
pub struct MemoryStore {
    // BTreeMap keeps list() order deterministic.
    inner: Mutex<BTreeMap<String, Entry>>,
}

struct Entry {
    value: Value,
    revision: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    async fn put(&self, collection: &str, id: &str, value: &Value) -> Result<String, StoreError> {
        let key = collections::document(collection, id);
        let mut inner = self.inner.lock().await;
        let revision = inner.get(&key).map_or(1, |e| e.revision + 1);
        inner.insert(
            key,
            Entry {
                value: value.clone(),
                revision,
            },
        );
        Ok(revision.to_string())
    }

    async fn put_if_match(
        &self,
        collection: &str,
        id: &str,
        value: &Value,
        expected_revision: &str,
    ) -> Result<String, StoreError> {
        let key = collections::document(collection, id);
        let mut inner = self.inner.lock().await;
        let current_revision = inner
            .get(&key)
            .ok_or_else(|| StoreError::NotFound { key: key.clone() })?
            .revision;
        if current_revision.to_string() != expected_revision {
            return Err(StoreError::PreconditionFailed { key });
        }
        let revision = current_revision + 1;
        inner.insert(
            key,
            Entry {
                value: value.clone(),
                revision,
            },
        );
        Ok(revision.to_string())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<StoredDocument, StoreError> {
        let key = collections::document(collection, id);
        let inner = self.inner.lock().await;
        let entry = inner
            .get(&key)
            .ok_or(StoreError::NotFound { key: key.clone() })?;
        Ok(StoredDocument {
            value: entry.value.clone(),
            revision: entry.revision.to_string(),
        })
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let prefix = collections::prefix(collection);
        let inner = self.inner.lock().await;
        Ok(inner
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, entry)| StoredDocument {
                value: entry.value.clone(),
                revision: entry.revision.to_string(),
            })
            .collect())
    }
}
