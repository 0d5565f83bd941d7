//! Authentication endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AppState;
use super::error::ApiError;
use crate::auth::{NewUser, UserRecord};
use crate::types::Username;
use crate::validation::{
    FULL_NAME_MAX, PASSWORD_LEN, USERNAME_LEN, ValidationError, check_email, check_len,
    check_max_len,
};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_len("username", &self.username, USERNAME_LEN)?;
        check_len("password", &self.password, PASSWORD_LEN)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl SignupRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_len("username", &self.username, USERNAME_LEN)?;
        check_email("email", &self.email)?;
        check_len("password", &self.password, PASSWORD_LEN)?;
        if let Some(full_name) = &self.full_name {
            check_max_len("full_name", full_name, FULL_NAME_MAX)?;
        }
        Ok(())
    }
}

/// Public view of an account. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: Username,
    pub email: String,
    pub full_name: Option<String>,
    /// Account creation date, `YYYY-MM-DD`.
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            created_at: user.created_at.format("%Y-%m-%d").to_string(),
            username: user.username,
            email: user.email,
            full_name: Some(user.full_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /api/auth/login`
///
/// - 200 with `UserResponse` on matching credentials
/// - 401 for unknown user or wrong password (same body either way)
/// - 422 for out-of-bounds fields
pub async fn login_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let user = app_state
        .authenticator()
        .login(&request.username, &request.password)?;
    Ok(Json(user.into()))
}

/// `POST /api/auth/signup`
///
/// - 200 with the created `UserResponse`. `full_name` echoes the request, so
///   it is `null` when omitted even though the stored account defaults it to
///   the username (visible on later logins).
/// - 409 if the username is taken
/// - 422 for out-of-bounds fields or a malformed email
pub async fn signup_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let requested_full_name = request.full_name.clone();
    let user = app_state.authenticator().signup(NewUser {
        username: Username::new(request.username),
        email: request.email,
        password: request.password,
        full_name: request.full_name,
    })?;
    Ok(Json(UserResponse {
        full_name: requested_full_name,
        ..user.into()
    }))
}

/// `GET /api/auth/user`
///
/// Demo endpoint: always the `demo` account.
pub async fn current_user_handler(
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = app_state.authenticator().current_user()?;
    Ok(Json(user.into()))
}

/// `POST /api/auth/logout`
pub async fn logout_handler() -> Json<MessageResponse> {
    info!("User logged out");
    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}
