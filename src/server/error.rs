//! HTTP error mapping.
//!
//! Every failed request gets the same JSON body shape:
//!
//! ```json
//! {
//!   "error": "Invalid username or password",
//!   "detail": "Invalid username or password",
//!   "status_code": 401,
//!   "timestamp": "..."
//! }
//! ```
//!
//! `detail` repeats `error` for clients that read the message from there.
//!
//! Internal failures are logged with their cause and reported to the client
//! only as "Error processing request".

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::AuthError;
use crate::validation::ValidationError;

/// Message returned for any failure the client cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error processing request";

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication or signup failure.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::malformed(rejection.body_text()))
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    /// The HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(AuthError::UsernameTaken) => StatusCode::CONFLICT,
            ApiError::Auth(AuthError::UserNotFound(_) | AuthError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the client.
    fn public_message(&self) -> String {
        if self.status().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let message = self.public_message();
        let body = ErrorBody {
            detail: message.clone(),
            error: message,
            status_code: status.as_u16(),
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}
