//! User entity: the account that owns contacts.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `id` is the caller-chosen external identity and never changes.
/// `token` is `None` while logged out and holds the opaque session token
/// while logged in; it is regenerated on every login.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub password: String,
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a new user from registration input. Timestamps are provisional
    /// and replaced by the database defaults on insert.
    pub fn new(id: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            password: password_hash,
            token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true while a session token is stored.
    pub fn is_logged_in(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_empty())
    }
}
