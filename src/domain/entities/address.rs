//! Address entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An address belonging to exactly one contact.
///
/// Access is authorized transitively: the owning contact must belong to the
/// requesting user before any address operation runs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Address {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
