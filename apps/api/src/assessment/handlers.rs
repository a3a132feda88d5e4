use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::questionnaire::{PublicQuestion, QuestionnaireForm};
use crate::assessment::scoring::{assess, Answer, AssessmentResult};
use crate::errors::AppError;
use crate::profile::classifier::classify;
use crate::profile::strengths::{generate_strengths, KeyStrength};
use crate::profile::view::{build_profile_view, PronounContext, ProfileView};
use crate::state::AppState;
use crate::store::persist_in_background;

#[derive(Deserialize)]
pub struct FormQuery {
    pub form: Option<String>,
}

#[derive(Serialize)]
pub struct QuestionListResponse {
    pub form: QuestionnaireForm,
    pub count: usize,
    pub questions: Vec<PublicQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub form: QuestionnaireForm,
    pub answers: Vec<Answer>,
    pub user_id: Option<Uuid>,
    pub viewer: Option<PronounContext>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub result: AssessmentResult,
    pub personality_type: String,
    pub dynamic_strengths: Vec<KeyStrength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileView>,
    /// True when a background write to the profile store was started.
    pub persistence_queued: bool,
}

fn parse_form(form: Option<&str>) -> Result<QuestionnaireForm, AppError> {
    match form {
        None => Ok(QuestionnaireForm::default()),
        Some(name) => QuestionnaireForm::parse(name)
            .ok_or_else(|| AppError::Validation(format!("Unknown questionnaire form '{name}'"))),
    }
}

/// GET /api/v1/assessments/questions?form=short|full
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(params): Query<FormQuery>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let form = parse_form(params.form.as_deref())?;
    let questions = state.questions.public_questions(form);
    Ok(Json(QuestionListResponse {
        form,
        count: questions.len(),
        questions,
    }))
}

/// POST /api/v1/assessments/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    if req.answers.is_empty() {
        return Err(AppError::Validation("answers must not be empty".to_string()));
    }

    let result = assess(&state.questions, req.form, &req.answers);
    let personality_type = classify(&result.disc);
    let profile = req
        .viewer
        .as_ref()
        .map(|ctx| build_profile_view(&result.disc, &state.catalog, ctx));

    // The response never waits on storage.
    let persistence_queued = match req.user_id {
        Some(user_id) => {
            persist_in_background(state.store.clone(), user_id, result.clone());
            true
        }
        None => false,
    };

    Ok(Json(ScoreResponse {
        personality_type: personality_type.label().to_string(),
        dynamic_strengths: generate_strengths(&result.disc),
        profile,
        persistence_queued,
        result,
    }))
}
