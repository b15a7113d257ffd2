use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use forge_core::collections;
use forge_core::models::FormType;
use forge_store::contributors::rebuild_contributors;
use forge_store::{DocumentStore, MemoryStore, ProfileService, SubmissionRepository};

#[tokio::test]
async fn first_sign_in_creates_a_profile() {
    let service = ProfileService::new(MemoryStore::new());

    let created = service
        .ensure_profile("uid-1", Some("a@b.org"), Some("Dr. A"), None)
        .await
        .unwrap();
    assert_eq!(created.uid, "uid-1");
    assert_eq!(created.email.as_deref(), Some("a@b.org"));
    assert_eq!(created.created_at, created.updated_at);

    // Second sign-in returns the stored profile instead of recreating it.
    let again = service
        .ensure_profile("uid-1", Some("other@b.org"), None, None)
        .await
        .unwrap();
    assert_eq!(again.email.as_deref(), Some("a@b.org"));
}

#[tokio::test]
async fn fresh_cache_entries_mask_out_of_band_writes() {
    let store = Arc::new(MemoryStore::new());
    let service = ProfileService::new(Arc::clone(&store));

    let profile = service
        .ensure_profile("uid-1", None, Some("Dr. A"), None)
        .await
        .unwrap();

    // Write around the service; the 5-minute cache still serves the old row.
    let mut tampered = serde_json::to_value(&profile).unwrap();
    tampered["displayName"] = json!("Dr. Z");
    store
        .put(collections::USERS, "uid-1", &tampered)
        .await
        .unwrap();

    let cached = service.get_profile("uid-1").await.unwrap();
    assert_eq!(cached.display_name.as_deref(), Some("Dr. A"));
}

#[tokio::test]
async fn expired_cache_entries_are_refetched() {
    let store = Arc::new(MemoryStore::new());
    let service = ProfileService::with_ttl(Arc::clone(&store), Duration::ZERO);

    let profile = service
        .ensure_profile("uid-1", None, Some("Dr. A"), None)
        .await
        .unwrap();

    let mut tampered = serde_json::to_value(&profile).unwrap();
    tampered["displayName"] = json!("Dr. Z");
    store
        .put(collections::USERS, "uid-1", &tampered)
        .await
        .unwrap();

    let reread = service.get_profile("uid-1").await.unwrap();
    assert_eq!(reread.display_name.as_deref(), Some("Dr. Z"));
}

#[tokio::test]
async fn profile_update_invalidates_the_cache_immediately() {
    let service = ProfileService::new(MemoryStore::new());

    let mut profile = service
        .ensure_profile("uid-1", None, Some("Dr. A"), None)
        .await
        .unwrap();
    profile.institution = Some("AIIMS Delhi".to_string());
    let updated = service.update_profile(profile).await.unwrap();
    assert!(updated.updated_at >= updated.created_at);

    let reread = service.get_profile("uid-1").await.unwrap();
    assert_eq!(reread.institution.as_deref(), Some("AIIMS Delhi"));
}

#[tokio::test]
async fn contributor_summaries_aggregate_submissions_and_profiles() {
    let store = Arc::new(MemoryStore::new());
    let repo = SubmissionRepository::new(Arc::clone(&store));
    let profiles = ProfileService::new(Arc::clone(&store));

    profiles
        .ensure_profile("uid-1", Some("a@b.org"), Some("Dr. A"), None)
        .await
        .unwrap();
    let payload = json!({ "diseaseOverview": { "description": "x" } });
    repo.submit(FormType::ComprehensiveParameterValidation, payload.clone(), "uid-1")
        .await
        .unwrap();
    repo.submit(FormType::ClinicalLogic, json!({ "diseaseName": "Dengue" }), "uid-1")
        .await
        .unwrap();
    repo.submit(FormType::ComprehensiveParameterValidation, payload, "uid-2")
        .await
        .unwrap();

    let contributors = rebuild_contributors(store.as_ref()).await.unwrap();
    assert_eq!(contributors.len(), 2);

    let first = contributors
        .iter()
        .find(|c| c.collaborator_id == "uid-1")
        .unwrap();
    assert_eq!(first.name, "Dr. A");
    assert_eq!(first.submission_count, 2);
    assert!(first.last_submission.is_some());

    // No profile on record: the summary still exists with a fallback name.
    let second = contributors
        .iter()
        .find(|c| c.collaborator_id == "uid-2")
        .unwrap();
    assert_eq!(second.name, "Anonymous Contributor");
    assert_eq!(second.submission_count, 1);

    // The derived collection was persisted too.
    let stored = store.list(collections::CONTRIBUTORS).await.unwrap();
    assert_eq!(stored.len(), 2);
}
