//! Disease information chat endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AppState;
use super::error::ApiError;
use crate::responder::respond;
use crate::validation::{PROMPT_LEN, check_len};

/// Model name reported with every chat response.
pub const CHAT_MODEL: &str = "healthcare-ai-gemini";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
    pub timestamp: DateTime<Utc>,
}

/// `POST /api/disease/chat`
///
/// ```ignore
/// POST /api/disease/chat HTTP/1.1
/// Content-Type: application/json
///
/// {"prompt": "I think I have diabetes"}
///
/// HTTP/1.1 200 OK
///
/// {"response": "**Diabetes Mellitus**\n\n...", "model": "healthcare-ai-gemini", "timestamp": "..."}
/// ```
pub async fn chat_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    check_len("prompt", &request.prompt, PROMPT_LEN)?;

    info!("Disease chat request received");
    let response = respond(app_state.knowledge(), &request.prompt).to_string();

    Ok(Json(ChatResponse {
        response,
        model: CHAT_MODEL.to_string(),
        timestamp: Utc::now(),
    }))
}
