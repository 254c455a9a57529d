//! Contact entity and search filter.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A contact owned by exactly one user.
///
/// Ownership is enforced at query time (`WHERE user_id = ?`), not by the
/// schema alone.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filter for the paginated contact search.
///
/// Always constrains by owner. The optional fields append case-insensitive
/// substring matches: `name` against first OR last name, `email` and `phone`
/// independently. Empty strings are treated as absent.
#[derive(Debug, Clone)]
pub struct ContactFilter {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactFilter {
    pub fn by_owner(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            email: None,
            phone: None,
        }
    }

    /// Drops filter terms that are empty strings so they do not constrain
    /// the query.
    pub fn normalized(mut self) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        self.name = non_empty(self.name);
        self.email = non_empty(self.email);
        self.phone = non_empty(self.phone);
        self
    }
}
