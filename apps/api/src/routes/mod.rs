pub mod health;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance;
use crate::extract::handlers as extract_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/upload",
            post(extract_handlers::handle_upload),
        )
        .route("/api/v1/resumes/enhance", post(enhance::handle_enhance))
        .route("/api/v1/resumes/save", post(resumes::handle_save))
        .route("/api/v1/resumes", get(resumes::handle_list))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::store::JsonFileStore;

    fn test_router(dir: &tempfile::TempDir) -> Router {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            save_path: dir
                .path()
                .join("saved_resume.json")
                .to_string_lossy()
                .into_owned(),
        };
        let store = Arc::new(JsonFileStore::new(config.save_path.clone().into()));
        build_router(AppState { config, store })
    }

    fn multipart_upload_request(filename: &str, content: &[u8]) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(&dir)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_with_unsupported_extension_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(&dir)
            .oneshot(multipart_upload_request("resume.txt", b"plain text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_upload_with_corrupt_pdf_is_unprocessable() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(&dir)
            .oneshot(multipart_upload_request("resume.pdf", b"not a pdf"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "DOCUMENT_UNREADABLE");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let boundary = "test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router(&dir).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_then_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(&dir);

        let save = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"name": "Jane Doe", "summary": "", "education": [], "experience": [], "skills": ["SQL"]}"#,
            ))
            .unwrap();
        let response = router.clone().oneshot(save).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(Request::get("/api/v1/resumes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let listed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_enhance_endpoint_decorates_list() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/enhance")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"section": "skills", "content": ["Python", "SQL"]}"#,
            ))
            .unwrap();

        let response = test_router(&dir).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["enhanced"],
            serde_json::json!(["Python (Enhanced)", "SQL (Enhanced)"])
        );
    }
}
