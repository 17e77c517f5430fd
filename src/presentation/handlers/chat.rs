use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::application::services::ChatError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub doc_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request), fields(doc_id = %request.doc_id))]
pub async fn chat_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
    Form(request): Form<ChatRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    tracing::debug!(message = %sanitize_prompt(&request.message), "Processing chat request");

    match state
        .chat_service
        .chat(&request.doc_id, &request.message)
        .await
    {
        Ok(reply) => {
            tracing::info!("Chat request successful");
            (StatusCode::OK, Json(ChatResponse { response: reply })).into_response()
        }
        Err(e) => chat_error_response(e),
    }
}

fn chat_error_response(error: ChatError) -> axum::response::Response {
    let (status, message) = match &error {
        ChatError::NotFound => (StatusCode::NOT_FOUND, "Document not found".to_string()),
        ChatError::MissingCredential => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "LLM API key not configured".to_string(),
        ),
        // The classifier's reason is logged below, never echoed to the caller.
        ChatError::PolicyViolation(_) => (
            StatusCode::BAD_REQUEST,
            "Query violates safety policies".to_string(),
        ),
        ChatError::Classification(_) | ChatError::Completion(_) => (
            StatusCode::BAD_GATEWAY,
            "Upstream LLM request failed".to_string(),
        ),
        ChatError::Storage(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal processing error".to_string(),
        ),
    };

    match &error {
        ChatError::NotFound => tracing::warn!("Chat request for unknown document"),
        _ => tracing::error!(error = %error, status = %status, "Chat request failed"),
    }

    (status, Json(ErrorResponse { error: message })).into_response()
}
