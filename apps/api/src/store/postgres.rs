use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::assessment::scoring::AssessmentResult;
use crate::models::profile::JobSeekerProfileRow;
use crate::store::{ProfileStore, StoreError, StoredDisc};

const PROFILE_COLUMNS: &str = "user_id, disc_red_percentage, disc_yellow_percentage, \
     disc_green_percentage, disc_blue_percentage, validity_score, consistency_score, \
     social_desirability_score, assessment_form, retake_count, updated_at";

/// Reads and writes the DISC columns of `job_seeker_profiles`.
#[derive(Clone)]
pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load_disc(&self, user_id: Uuid) -> Result<Option<StoredDisc>, StoreError> {
        let row: Option<JobSeekerProfileRow> = sqlx::query_as(&format!(
            "SELECT {PROFILE_COLUMNS} FROM job_seeker_profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.and_then(JobSeekerProfileRow::into_stored))
    }

    async fn save_assessment(
        &self,
        user_id: Uuid,
        result: &AssessmentResult,
    ) -> Result<StoredDisc, StoreError> {
        // First save inserts with retake_count 0; every later save is a retake.
        // A row that exists without DISC data (created elsewhere) stays at 0.
        let row: JobSeekerProfileRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO job_seeker_profiles
                (user_id, disc_red_percentage, disc_yellow_percentage,
                 disc_green_percentage, disc_blue_percentage, validity_score,
                 consistency_score, social_desirability_score, assessment_form,
                 retake_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 0)
            ON CONFLICT (user_id) DO UPDATE SET
                disc_red_percentage       = EXCLUDED.disc_red_percentage,
                disc_yellow_percentage    = EXCLUDED.disc_yellow_percentage,
                disc_green_percentage     = EXCLUDED.disc_green_percentage,
                disc_blue_percentage      = EXCLUDED.disc_blue_percentage,
                validity_score            = EXCLUDED.validity_score,
                consistency_score         = EXCLUDED.consistency_score,
                social_desirability_score = EXCLUDED.social_desirability_score,
                assessment_form           = EXCLUDED.assessment_form,
                retake_count              = CASE
                    WHEN job_seeker_profiles.disc_red_percentage IS NULL
                        THEN job_seeker_profiles.retake_count
                    ELSE job_seeker_profiles.retake_count + 1
                END,
                updated_at                = now()
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(result.disc.red)
        .bind(result.disc.yellow)
        .bind(result.disc.green)
        .bind(result.disc.blue)
        .bind(result.diagnostics.validity)
        .bind(result.diagnostics.consistency)
        .bind(result.diagnostics.social_desirability)
        .bind(result.form.as_str())
        .fetch_one(&self.db)
        .await?;

        saved_row(row)
    }
}

/// The row returned by the upsert. Missing DISC columns mean the write did
/// not land and are reported rather than papered over.
fn saved_row(row: JobSeekerProfileRow) -> Result<StoredDisc, StoreError> {
    let user_id = row.user_id;
    row.into_stored().ok_or(StoreError::IncompleteRow(user_id))
}
