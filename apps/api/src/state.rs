use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Retained for handlers that grow runtime knobs (e.g. upload limits).
    #[allow(dead_code)]
    pub config: Config,
    /// Injected store seam. Production uses `JsonFileStore`; tests may swap
    /// in another implementation.
    pub store: Arc<dyn ResumeStore>,
}
