use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assessment::scoring::AssessmentResult;
use crate::profile::disc::DiscScore;
use crate::store::{ProfileStore, StoreError, StoredDisc};

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, StoredDisc>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a bare DISC score, as demo data does, without diagnostics.
    pub async fn seed(&self, user_id: Uuid, disc: DiscScore) {
        self.profiles.write().await.insert(
            user_id,
            StoredDisc {
                user_id,
                disc,
                diagnostics: None,
                form: None,
                retake_count: 0,
                updated_at: Utc::now(),
            },
        );
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_disc(&self, user_id: Uuid) -> Result<Option<StoredDisc>, StoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn save_assessment(
        &self,
        user_id: Uuid,
        result: &AssessmentResult,
    ) -> Result<StoredDisc, StoreError> {
        let mut profiles = self.profiles.write().await;
        let retake_count = profiles
            .get(&user_id)
            .map(|existing| existing.retake_count + 1)
            .unwrap_or(0);

        let stored = StoredDisc {
            user_id,
            disc: result.disc,
            diagnostics: Some(result.diagnostics),
            form: Some(result.form),
            retake_count,
            updated_at: Utc::now(),
        };
        profiles.insert(user_id, stored.clone());
        Ok(stored)
    }
}
