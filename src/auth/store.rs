//! User storage.
//!
//! [`UserStore`] is the seam between the authenticator and wherever accounts
//! live. [`InMemoryUserStore`] is the process-lifetime mock: seeded with two
//! demo accounts, lost on restart.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use thiserror::Error;

use crate::types::Username;

/// A stored account.
///
/// Passwords are kept in plaintext; this store backs a demo only.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: Username,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Errors from a user store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with this username already exists.
    #[error("user already exists: {0}")]
    AlreadyExists(Username),

    /// The store's lock was poisoned by a panicking writer.
    #[error("user store lock poisoned")]
    Poisoned,
}

/// Account storage.
pub trait UserStore: Send + Sync {
    /// Returns the account for `username`, if any.
    fn get(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Inserts a new account.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if the username is taken. The
    /// existence check and the write must be atomic.
    fn insert(&self, record: UserRecord) -> Result<(), StoreError>;
}

/// In-memory [`UserStore`] backed by a `RwLock<HashMap>`.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Username, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two demo accounts, `testuser` and `demo`.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = [
            ("testuser", "password123", "test@example.com", "Test User"),
            ("demo", "demo123", "demo@healthcare.ai", "Demo User"),
        ];

        let users = seed
            .into_iter()
            .map(|(username, password, email, full_name)| {
                let username = Username::new(username);
                let record = UserRecord {
                    username: username.clone(),
                    email: email.to_string(),
                    full_name: full_name.to_string(),
                    password: password.to_string(),
                    created_at: now,
                };
                (username, record)
            })
            .collect();

        InMemoryUserStore {
            users: RwLock::new(users),
        }
    }

    /// Number of stored accounts.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.users.read().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl UserStore for InMemoryUserStore {
    fn get(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::Poisoned)?;
        Ok(users.get(username).cloned())
    }

    fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        use std::collections::hash_map::Entry;

        let mut users = self.users.write().map_err(|_| StoreError::Poisoned)?;
        match users.entry(record.username.clone()) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }
}
