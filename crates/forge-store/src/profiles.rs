//! Contributor profiles with a read-through TTL cache.
//!
//! The cache lives at the repository boundary, keyed by uid, and is
//! replaced on every write so component lifecycles never matter for
//! correctness.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, info};

use forge_core::collections;
use forge_core::models::profile::UserProfile;

use crate::document::DocumentStore;
use crate::error::{RepositoryError, StoreError};

/// How long a cached profile stays fresh.
pub const PROFILE_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    profile: UserProfile,
    fetched_at: Instant,
}

pub struct ProfileService<S> {
    store: S,
    ttl: Duration,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl<S: DocumentStore> ProfileService<S> {
    pub fn new(store: S) -> Self {
        Self::with_ttl(store, PROFILE_CACHE_TTL)
    }

    pub fn with_ttl(store: S, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a profile, serving from cache while the entry is fresh.
    pub async fn get_profile(&self, uid: &str) -> Result<UserProfile, RepositoryError> {
        {
            let cache = self.cache.lock().await;
            if let Some(entry) = cache.get(uid)
                && entry.fetched_at.elapsed() < self.ttl
            {
                debug!(uid = uid, "profile cache hit");
                return Ok(entry.profile.clone());
            }
        }

        let profile = self.fetch(uid).await?;
        self.remember(profile.clone()).await;
        Ok(profile)
    }

    /// Called on sign-in: return the existing profile, or create one from
    /// the identity provider's basic fields.
    pub async fn ensure_profile(
        &self,
        uid: &str,
        email: Option<&str>,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<UserProfile, RepositoryError> {
        match self.fetch(uid).await {
            Ok(profile) => {
                self.remember(profile.clone()).await;
                Ok(profile)
            }
            Err(RepositoryError::NotFound { .. }) => {
                let now = jiff::Timestamp::now();
                let profile = UserProfile {
                    uid: uid.to_string(),
                    email: email.map(str::to_string),
                    display_name: display_name.map(str::to_string),
                    photo_url: photo_url.map(str::to_string),
                    institution: None,
                    specialty: None,
                    role: None,
                    bio: None,
                    created_at: now,
                    updated_at: now,
                };
                self.write(&profile).await?;
                info!(uid = uid, "profile created on first sign-in");
                Ok(profile)
            }
            Err(e) => Err(e),
        }
    }

    /// Explicit profile edit. Stamps `updated_at` and replaces the cache
    /// entry, so a follow-up read never serves the stale version.
    pub async fn update_profile(
        &self,
        mut profile: UserProfile,
    ) -> Result<UserProfile, RepositoryError> {
        profile.updated_at = jiff::Timestamp::now();
        self.write(&profile).await?;
        Ok(profile)
    }

    async fn fetch(&self, uid: &str) -> Result<UserProfile, RepositoryError> {
        match self.store.get(collections::USERS, uid).await {
            Ok(doc) => Ok(serde_json::from_value(doc.value)?),
            Err(StoreError::NotFound { .. }) => {
                Err(RepositoryError::NotFound { id: uid.to_string() })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, profile: &UserProfile) -> Result<(), RepositoryError> {
        let document = serde_json::to_value(profile)?;
        self.store
            .put(collections::USERS, &profile.uid, &document)
            .await?;
        self.remember(profile.clone()).await;
        Ok(())
    }

    async fn remember(&self, profile: UserProfile) {
        let mut cache = self.cache.lock().await;
        cache.insert(
            profile.uid.clone(),
            CacheEntry {
                profile,
                fetched_at: Instant::now(),
            },
        );
    }
}
