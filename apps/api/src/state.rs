use std::sync::Arc;

use crate::assessment::questionnaire::QuestionBank;
use crate::profile::catalog::ProfileCatalog;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and never mutated.
    pub catalog: Arc<ProfileCatalog>,
    pub questions: Arc<QuestionBank>,
    /// Default: PgProfileStore. Tests use InMemoryProfileStore.
    pub store: Arc<dyn ProfileStore>,
}
