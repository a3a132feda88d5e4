use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::assessment::questionnaire::QuestionnaireForm;
use crate::assessment::scoring::Diagnostics;
use crate::profile::disc::DiscScore;
use crate::store::StoredDisc;

/// DISC-related columns of `job_seeker_profiles`. Seeded and demo rows may
/// carry percentages without diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSeekerProfileRow {
    pub user_id: Uuid,
    pub disc_red_percentage: Option<f64>,
    pub disc_yellow_percentage: Option<f64>,
    pub disc_green_percentage: Option<f64>,
    pub disc_blue_percentage: Option<f64>,
    pub validity_score: Option<f64>,
    pub consistency_score: Option<f64>,
    pub social_desirability_score: Option<f64>,
    pub assessment_form: Option<String>,
    pub retake_count: i32,
    pub updated_at: DateTime<Utc>,
}

impl JobSeekerProfileRow {
    /// `None` while the profile has no DISC result yet.
    pub fn into_stored(self) -> Option<StoredDisc> {
        let disc = DiscScore::new(
            self.disc_red_percentage?,
            self.disc_yellow_percentage?,
            self.disc_green_percentage?,
            self.disc_blue_percentage?,
        );

        let diagnostics = match (
            self.validity_score,
            self.consistency_score,
            self.social_desirability_score,
        ) {
            (Some(validity), Some(consistency), Some(social_desirability)) => Some(Diagnostics {
                validity,
                consistency,
                social_desirability,
            }),
            _ => None,
        };

        let form = self
            .assessment_form
            .as_deref()
            .and_then(QuestionnaireForm::parse);

        Some(StoredDisc {
            user_id: self.user_id,
            disc,
            diagnostics,
            form,
            retake_count: self.retake_count,
            updated_at: self.updated_at,
        })
    }
}
