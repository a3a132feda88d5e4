//! Profile Store — where computed DISC results are written back.
//!
//! The profile record itself belongs to the surrounding application; this
//! module only reads and writes its DISC and diagnostic fields.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`: PostgreSQL in the binary,
//! the in-memory store in tests.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::assessment::questionnaire::QuestionnaireForm;
use crate::assessment::scoring::{AssessmentResult, Diagnostics};
use crate::profile::disc::DiscScore;

pub use memory::InMemoryProfileStore;
pub use postgres::PgProfileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Profile {0} has no DISC data after saving")]
    IncompleteRow(Uuid),
}

/// DISC result as persisted on a job-seeker profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDisc {
    pub user_id: Uuid,
    pub disc: DiscScore,
    pub diagnostics: Option<Diagnostics>,
    pub form: Option<QuestionnaireForm>,
    /// 0 after the first assessment, +1 for every retake.
    pub retake_count: i32,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `None` when the user has no DISC result on record.
    async fn load_disc(&self, user_id: Uuid) -> Result<Option<StoredDisc>, StoreError>;

    /// Overwrites the DISC fields and bumps the retake counter.
    async fn save_assessment(
        &self,
        user_id: Uuid,
        result: &AssessmentResult,
    ) -> Result<StoredDisc, StoreError>;
}

/// Spawns the write and returns immediately. The outcome is only logged.
pub fn persist_in_background(
    store: Arc<dyn ProfileStore>,
    user_id: Uuid,
    result: AssessmentResult,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match store.save_assessment(user_id, &result).await {
            Ok(stored) => info!(
                "Saved DISC result for user {user_id} (retake {})",
                stored.retake_count
            ),
            Err(e) => error!("Failed to save DISC result for user {user_id}: {e}"),
        }
    })
}
