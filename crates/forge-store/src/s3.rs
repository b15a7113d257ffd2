//! S3-backed document store. Collections are key prefixes and every
//! document is one JSON object at `{collection}/{id}.json`.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde_json::Value;
use tracing::{debug, info};

use forge_core::collections;

use crate::document::{DocumentStore, StoredDocument};
use crate::error::StoreError;

/// Environment variable naming the backing bucket.
pub const BUCKET_ENV: &str = "CLINICALFORGE_BUCKET";

pub struct S3DocumentStore {
    client: Client,
    bucket: String,
}

impl S3DocumentStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a store from the process environment: default AWS credential
    /// chain plus [`BUCKET_ENV`] for the bucket name.
    pub async fn from_env() -> Result<Self, StoreError> {
        let bucket = std::env::var(BUCKET_ENV)
            .map_err(|_| StoreError::Config(format!("{BUCKET_ENV} is not set")))?;
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        info!(bucket = %bucket, "document store configured");
        Ok(Self::new(Client::new(&config), bucket))
    }

    async fn get_by_key(&self, key: &str) -> Result<StoredDocument, StoreError> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    StoreError::NotFound {
                        key: key.to_string(),
                    }
                } else {
                    StoreError::Get(err.to_string())
                }
            })?;

        let revision = resp.e_tag().unwrap_or_default().to_string();
        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Get(e.to_string()))?
            .into_bytes();
        let value: Value = serde_json::from_slice(&body)?;

        Ok(StoredDocument { value, revision })
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(prefix);

            if let Some(token) = &continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| StoreError::List(e.into_service_error().to_string()))?;

            for obj in resp.contents() {
                if let Some(key) = obj.key() {
                    keys.push(key.to_string());
                }
            }

            if resp.is_truncated() == Some(true) {
                continuation_token = resp.next_continuation_token().map(|s| s.to_string());
            } else {
                break;
            }
        }

        Ok(keys)
    }
}

impl DocumentStore for S3DocumentStore {
    async fn put(&self, collection: &str, id: &str, value: &Value) -> Result<String, StoreError> {
        let key = collections::document(collection, id);
        let body = serde_json::to_vec_pretty(value)?;

        let resp = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::Put(e.into_service_error().to_string()))?;

        debug!(key = %key, "document written");
        Ok(resp.e_tag().unwrap_or_default().to_string())
    }

    async fn put_if_match(
        &self,
        collection: &str,
        id: &str,
        value: &Value,
        expected_revision: &str,
    ) -> Result<String, StoreError> {
        let key = collections::document(collection, id);
        let body = serde_json::to_vec_pretty(value)?;

        let resp = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .if_match(expected_revision)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                // S3 returns 412 Precondition Failed when If-Match doesn't match
                if err.to_string().contains("PreconditionFailed") {
                    StoreError::PreconditionFailed {
                        key: key.to_string(),
                    }
                } else {
                    StoreError::Put(err.to_string())
                }
            })?;

        debug!(key = %key, "document revised");
        Ok(resp.e_tag().unwrap_or_default().to_string())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<StoredDocument, StoreError> {
        self.get_by_key(&collections::document(collection, id))
            .await
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let prefix = collections::prefix(collection);
        let keys = self.list_keys(&prefix).await?;
        debug!(collection = collection, count = keys.len(), "listing collection");

        let mut documents = Vec::with_capacity(keys.len());
        for key in &keys {
            documents.push(self.get_by_key(key).await?);
        }
        Ok(documents)
    }
}
