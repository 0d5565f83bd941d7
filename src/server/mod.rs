//! HTTP server for the healthcare assistant.
//!
//! # Endpoints
//!
//! - `GET /` - Service info
//! - `GET /health`, `GET /api/health` - Liveness checks
//! - `POST /api/auth/login` - Check credentials against the user store
//! - `POST /api/auth/signup` - Create an account
//! - `GET /api/auth/user` - The demo account
//! - `POST /api/auth/logout` - Acknowledge logout
//! - `POST /api/disease/chat` - Canned disease information for a prompt
//! - `POST /api/testcase/generate` - Templated test cases for a requirement

use std::sync::Arc;

use tower_http::trace::TraceLayer;

pub mod auth;
pub mod disease;
pub mod error;
pub mod health;
pub mod testcase;

pub use auth::{current_user_handler, login_handler, logout_handler, signup_handler};
pub use disease::chat_handler;
pub use error::ApiError;
pub use health::{api_health_handler, health_handler, root_handler};
pub use testcase::generate_handler;

use crate::auth::Authenticator;
use crate::knowledge::KnowledgeBase;

/// Shared application state.
///
/// This is passed to all handlers via Axum's `State` extractor. The knowledge
/// base is read-only; the authenticator owns the only mutable state (the user
/// store), behind its own lock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    knowledge: KnowledgeBase,
    authenticator: Authenticator,
}

impl AppState {
    pub fn new(knowledge: KnowledgeBase, authenticator: Authenticator) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                knowledge,
                authenticator,
            }),
        }
    }

    /// Returns the disease knowledge base.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.inner.knowledge
    }

    /// Returns the authenticator.
    pub fn authenticator(&self) -> &Authenticator {
        &self.inner.authenticator
    }
}

impl Default for AppState {
    /// Built-in knowledge base and a seeded in-memory user store.
    fn default() -> Self {
        AppState::new(KnowledgeBase::builtin(), Authenticator::in_memory())
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/health", get(api_health_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/signup", post(signup_handler))
        .route("/api/auth/user", get(current_user_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/disease/chat", post(chat_handler))
        .route("/api/testcase/generate", post(generate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
