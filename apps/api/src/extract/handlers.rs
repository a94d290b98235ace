use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extract::process_document;
use crate::models::resume::ResumeRecord;

/// POST /api/v1/resumes/upload
///
/// Multipart upload; the `file` field carries the résumé document. The
/// declared filename picks the extractor, and the structured record comes
/// back for client-side editing.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<ResumeRecord>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| AppError::Validation("File field has no filename".to_string()))?;

        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        info!(filename = %filename, size = data.len(), "Processing uploaded resume");
        let record = process_document(&filename, &data)?;
        return Ok(Json(record));
    }

    Err(AppError::Validation(
        "No file field provided in multipart body".to_string(),
    ))
}
