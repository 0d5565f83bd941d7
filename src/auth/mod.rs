//! Mock authentication.
//!
//! Plaintext credential checks against a [`UserStore`]. There are no tokens
//! and no sessions: a successful login just returns the account.
//!
//! Unknown usernames and wrong passwords produce the same
//! [`AuthError::InvalidCredentials`], so callers cannot tell which accounts
//! exist.

pub mod store;

pub use store::{InMemoryUserStore, StoreError, UserRecord, UserStore};

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::types::Username;

/// Account resolved by the demo "current user" endpoint.
pub const DEMO_USERNAME: &str = "demo";

/// Errors from authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Signup for a username that already exists.
    #[error("Username already exists")]
    UsernameTaken,

    /// The demo account is missing from the store.
    #[error("user not found: {0}")]
    UserNotFound(Username),

    /// The underlying store failed.
    #[error("user store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(_) => AuthError::UsernameTaken,
            other => AuthError::Store(other),
        }
    }
}

/// A signup request that has already passed field validation.
#[derive(Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: String,
    pub password: String,
    /// Defaults to the username when absent.
    pub full_name: Option<String>,
}

/// Login and signup over an injected [`UserStore`].
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn UserStore>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Authenticator { store }
    }

    /// An authenticator over a freshly seeded [`InMemoryUserStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::seeded()))
    }

    /// Checks `password` against the stored account for `username`.
    pub fn login(&self, username: &str, password: &str) -> Result<UserRecord, AuthError> {
        info!(username = %username, "Login attempt");

        let Some(user) = self.store.get(username)? else {
            warn!(username = %username, "Login rejected: unknown user");
            return Err(AuthError::InvalidCredentials);
        };
        if user.password != password {
            warn!(username = %username, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(username = %username, "User logged in");
        Ok(user)
    }

    /// Creates an account and returns the stored record.
    pub fn signup(&self, new_user: NewUser) -> Result<UserRecord, AuthError> {
        info!(username = %new_user.username, "Signup attempt");

        let full_name = new_user
            .full_name
            .unwrap_or_else(|| new_user.username.as_str().to_string());
        let record = UserRecord {
            username: new_user.username,
            email: new_user.email,
            full_name,
            password: new_user.password,
            created_at: Utc::now(),
        };

        match self.store.insert(record.clone()) {
            Ok(()) => {
                info!(username = %record.username, "User signed up");
                Ok(record)
            }
            Err(StoreError::AlreadyExists(username)) => {
                warn!(username = %username, "Signup rejected: username taken");
                Err(AuthError::UsernameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The account behind the demo "current user" endpoint.
    pub fn current_user(&self) -> Result<UserRecord, AuthError> {
        self.store
            .get(DEMO_USERNAME)?
            .ok_or_else(|| AuthError::UserNotFound(Username::new(DEMO_USERNAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, full_name: Option<&str>) -> NewUser {
        NewUser {
            username: Username::new(username),
            email: format!("{username}@example.com"),
            password: "hunter22".to_string(),
            full_name: full_name.map(str::to_string),
        }
    }

    /// A store whose every operation fails.
    struct BrokenStore;

    impl UserStore for BrokenStore {
        fn get(&self, _username: &str) -> Result<Option<UserRecord>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn insert(&self, _record: UserRecord) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn login_with_seeded_credentials() {
        let auth = Authenticator::in_memory();
        let user = auth.login("testuser", "password123").unwrap();
        assert_eq!(user.username.as_str(), "testuser");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.full_name, "Test User");
    }

    #[test]
    fn unknown_user_and_wrong_password_are_indistinguishable() {
        let auth = Authenticator::in_memory();
        let unknown = auth.login("nobody", "password123").unwrap_err();
        let wrong = auth.login("testuser", "wrong-password").unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn password_match_is_exact() {
        let auth = Authenticator::in_memory();
        assert!(auth.login("demo", "DEMO123").is_err());
        assert!(auth.login("demo", "demo123 ").is_err());
        assert!(auth.login("Demo", "demo123").is_err());
    }

    #[test]
    fn signup_then_login() {
        let auth = Authenticator::in_memory();
        let created = auth.signup(new_user("alice", Some("Alice Liddell"))).unwrap();
        assert_eq!(created.full_name, "Alice Liddell");

        let user = auth.login("alice", "hunter22").unwrap();
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn signup_defaults_full_name_to_username() {
        let auth = Authenticator::in_memory();
        let created = auth.signup(new_user("bob", None)).unwrap();
        assert_eq!(created.full_name, "bob");
    }

    #[test]
    fn signup_rejects_existing_username() {
        let auth = Authenticator::in_memory();
        let err = auth.signup(new_user("demo", None)).unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken));

        // The seeded account is untouched.
        assert!(auth.login("demo", "demo123").is_ok());
    }

    #[test]
    fn current_user_is_demo_account() {
        let auth = Authenticator::in_memory();
        let user = auth.current_user().unwrap();
        assert_eq!(user.username.as_str(), DEMO_USERNAME);
        assert_eq!(user.full_name, "Demo User");
    }

    #[test]
    fn current_user_missing_from_empty_store() {
        let auth = Authenticator::new(Arc::new(InMemoryUserStore::new()));
        assert!(matches!(auth.current_user(), Err(AuthError::UserNotFound(_))));
    }

    #[test]
    fn store_failures_surface_as_store_errors() {
        let auth = Authenticator::new(Arc::new(BrokenStore));
        assert!(matches!(
            auth.login("demo", "demo123"),
            Err(AuthError::Store(StoreError::Poisoned))
        ));
        assert!(matches!(
            auth.signup(new_user("carol", None)),
            Err(AuthError::Store(StoreError::Poisoned))
        ));
    }
}
