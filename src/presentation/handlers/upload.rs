use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, TextSplitter};
use crate::application::services::UploadError;
use crate::domain::ContentType;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub doc_id: String,
    pub summary: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type_str = field.content_type().unwrap_or("application/octet-stream");

    tracing::debug!(filename = %filename, content_type = %content_type_str, "Processing file upload");

    let content_type = match ContentType::from_mime(content_type_str) {
        Some(ct) => ct,
        None => {
            tracing::warn!(content_type = %content_type_str, "Unsupported content type");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Unsupported file type: {}", content_type_str),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state
        .upload_service
        .upload(&data, filename.clone(), content_type)
        .await
    {
        Ok(receipt) => {
            tracing::info!(doc_id = %receipt.id, filename = %filename, "Upload complete");
            (
                StatusCode::OK,
                Json(UploadResponse {
                    doc_id: receipt.id.to_string(),
                    summary: receipt.summary,
                }),
            )
                .into_response()
        }
        Err(e) => upload_error_response(e),
    }
}

fn upload_error_response(error: UploadError) -> axum::response::Response {
    let (status, message) = match &error {
        UploadError::Extraction(FileLoaderError::UnsupportedContentType(mime)) => (
            StatusCode::BAD_REQUEST,
            format!("Unsupported file type: {}", mime),
        ),
        UploadError::Extraction(FileLoaderError::ExtractionFailed(_)) => (
            StatusCode::BAD_REQUEST,
            "Failed to extract text from file".to_string(),
        ),
        UploadError::MissingCredential => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "LLM API key not configured".to_string(),
        ),
        UploadError::Splitting(_) | UploadError::Storage(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal processing error".to_string(),
        ),
        UploadError::Summarization(_) => (
            StatusCode::BAD_GATEWAY,
            "Upstream LLM request failed".to_string(),
        ),
    };

    tracing::error!(error = %error, status = %status, "Upload failed");

    (status, Json(ErrorResponse { error: message })).into_response()
}
