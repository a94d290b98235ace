//! Mock AI enhancement: pure string decoration, no model call.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: Option<String>,
    pub content: Value,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced: Value,
}

/// POST /api/v1/resumes/enhance
pub async fn handle_enhance(Json(req): Json<EnhanceRequest>) -> Json<EnhanceResponse> {
    debug!(
        section = req.section.as_deref().unwrap_or("unspecified"),
        "Enhancing section content"
    );
    Json(EnhanceResponse {
        enhanced: enhance_content(req.content),
    })
}

/// Applies the mock enhancement: string items in a list get an individual
/// suffix, a bare string is trimmed and suffixed, anything else passes
/// through unchanged.
pub fn enhance_content(content: Value) -> Value {
    match content {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Value::String(format!("{s} (Enhanced)")),
                    other => other,
                })
                .collect(),
        ),
        Value::String(s) => Value::String(format!("{} (Enhanced by AI)", s.trim())),
        other => other,
    }
}
