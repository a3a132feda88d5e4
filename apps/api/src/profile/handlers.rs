use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::catalog::{ProfileContent, DEFAULT_LABEL};
use crate::profile::classifier::PersonalityType;
use crate::profile::disc::DiscScore;
use crate::profile::legacy::resolve_label;
use crate::profile::view::{build_profile_view, PronounContext, ProfileView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub disc: DiscScore,
    #[serde(default)]
    pub viewer: PronounContext,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTypeSummary {
    pub label: &'static str,
    pub emoji: String,
    pub brief_summary: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTypeDetail {
    pub requested: String,
    /// Canonical label whose content was returned, or `default`.
    pub resolved_label: String,
    pub is_default: bool,
    pub content: ProfileContent,
}

/// POST /api/v1/profiles/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Json<ProfileView> {
    Json(build_profile_view(&req.disc, &state.catalog, &req.viewer))
}

/// GET /api/v1/profiles/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(ctx): Query<PronounContext>,
) -> Result<Json<ProfileView>, AppError> {
    let stored = state
        .store
        .load_disc(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No DISC profile for user {user_id}")))?;

    Ok(Json(build_profile_view(&stored.disc, &state.catalog, &ctx)))
}

/// GET /api/v1/personality-types
pub async fn handle_list_types(State(state): State<AppState>) -> Json<Vec<PersonalityTypeSummary>> {
    let types = PersonalityType::ALL
        .into_iter()
        .map(|t| {
            let content = state.catalog.lookup_type(t);
            PersonalityTypeSummary {
                label: t.label(),
                emoji: content.emoji.clone(),
                brief_summary: content.brief_summary.clone(),
            }
        })
        .collect();
    Json(types)
}

/// GET /api/v1/personality-types/:label
///
/// Never 404s: unknown labels get the default bundle, like every other lookup.
pub async fn handle_get_type(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Json<PersonalityTypeDetail> {
    let resolved = resolve_label(&label)
        .map(|t| t.label().to_string())
        .or_else(|| Some(label.trim().to_string()))
        .filter(|l| state.catalog.contains(l));

    Json(PersonalityTypeDetail {
        is_default: resolved.is_none(),
        resolved_label: resolved.unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        content: state.catalog.lookup(&label).clone(),
        requested: label,
    })
}
