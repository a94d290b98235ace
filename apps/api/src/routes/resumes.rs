use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, StoredResume};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: Uuid,
    pub message: String,
}

/// POST /api/v1/resumes/save
///
/// Accepts a client-edited record, appends it to the injected store and
/// dumps it to the configured JSON file.
pub async fn handle_save(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<SaveResponse>, AppError> {
    let stored = state.store.append(record).await.map_err(AppError::Storage)?;
    info!(resume_id = %stored.id, "Resume saved");
    Ok(Json(SaveResponse {
        id: stored.id,
        message: "Resume saved successfully".to_string(),
    }))
}

/// GET /api/v1/resumes
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<StoredResume>> {
    Json(state.store.list().await)
}
