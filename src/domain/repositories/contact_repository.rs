//! Repository trait for contact data access.

use crate::domain::entities::{Contact, ContactFilter};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

/// Repository interface for contacts.
///
/// The composite `id` + `user_id` lookup is the ownership check every
/// authenticated operation goes through.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Finds a contact scoped to its owner. `Ok(None)` covers both a missing
    /// row and a row owned by someone else.
    async fn find_by_id_and_user_id(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        user_id: &str,
    ) -> Result<Option<Contact>, AppError>;

    /// Inserts a new contact row and returns it as stored, database-assigned
    /// timestamps included.
    async fn create(&self, conn: &mut PgConnection, contact: &Contact)
    -> Result<Contact, AppError>;

    /// Persists the mutable fields of an existing contact and returns the
    /// stored row.
    async fn update(&self, conn: &mut PgConnection, contact: &Contact)
    -> Result<Contact, AppError>;

    /// Deletes a contact row. Child addresses are not touched.
    async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> Result<(), AppError>;

    /// Returns one page of contacts matching the filter, newest first.
    /// `offset`/`limit` are plain SQL offsets; the caller does the page math.
    async fn search(
        &self,
        conn: &mut PgConnection,
        filter: &ContactFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Contact>, AppError>;

    /// Counts all contacts matching the filter, without offset or limit.
    async fn count(&self, conn: &mut PgConnection, filter: &ContactFilter)
    -> Result<i64, AppError>;
}
