//! Contributor aggregation. The `contributors` collection is derived data,
//! rebuilt wholesale from submissions and profiles.

use std::collections::BTreeMap;

use tracing::info;

use forge_core::collections;
use forge_core::models::contributor::Contributor;
use forge_core::models::profile::UserProfile;
use forge_core::models::{FormType, SubmissionRecord};

use crate::document::DocumentStore;
use crate::error::RepositoryError;

const NAME_FALLBACK: &str = "Anonymous Contributor";

/// Rebuild every contributor summary from the three submission
/// collections, write them to the `contributors` collection, and return
/// them sorted by collaborator id.
pub async fn rebuild_contributors<S: DocumentStore>(
    store: &S,
) -> Result<Vec<Contributor>, RepositoryError> {
    let mut tallies: BTreeMap<String, (u32, Option<jiff::Timestamp>)> = BTreeMap::new();

    for form_type in [
        FormType::ComprehensiveParameterValidation,
        FormType::AdvancedClinicalAnalytics,
        FormType::ClinicalLogic,
    ] {
        for doc in store.list(form_type.collection()).await? {
            let Ok(record) = serde_json::from_value::<SubmissionRecord>(doc.value) else {
                continue;
            };
            let tally = tallies.entry(record.collaborator_id).or_insert((0, None));
            tally.0 += 1;
            if tally.1.is_none_or(|last| record.submitted_at > last) {
                tally.1 = Some(record.submitted_at);
            }
        }
    }

    let mut contributors = Vec::with_capacity(tallies.len());
    for (collaborator_id, (submission_count, last_submission)) in tallies {
        let profile = match store.get(collections::USERS, &collaborator_id).await {
            Ok(doc) => serde_json::from_value::<UserProfile>(doc.value).ok(),
            Err(_) => None,
        };

        let name = profile
            .as_ref()
            .and_then(|p| p.display_name.clone().or_else(|| p.email.clone()))
            .unwrap_or_else(|| NAME_FALLBACK.to_string());

        let contributor = Contributor {
            collaborator_id: collaborator_id.clone(),
            name,
            institution: profile.as_ref().and_then(|p| p.institution.clone()),
            specialty: profile.as_ref().and_then(|p| p.specialty.clone()),
            submission_count,
            last_submission,
        };

        let document = serde_json::to_value(&contributor)?;
        store
            .put(collections::CONTRIBUTORS, &collaborator_id, &document)
            .await?;
        contributors.push(contributor);
    }

    info!(count = contributors.len(), "contributor summaries rebuilt");
    Ok(contributors)
}
