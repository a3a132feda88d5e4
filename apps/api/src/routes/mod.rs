pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessments/questions",
            get(assessment::handle_list_questions),
        )
        .route("/api/v1/assessments/score", post(assessment::handle_score))
        // Profile API
        .route("/api/v1/profiles/preview", post(profile::handle_preview))
        .route("/api/v1/profiles/:user_id", get(profile::handle_get_profile))
        .route("/api/v1/personality-types", get(profile::handle_list_types))
        .route(
            "/api/v1/personality-types/:label",
            get(profile::handle_get_type),
        )
        .with_state(state)
}
