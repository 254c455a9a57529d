//! Repository trait for address data access.

use crate::domain::entities::Address;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

/// Repository interface for addresses, always scoped to a parent contact.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Finds an address scoped to its parent contact.
    async fn find_by_id_and_contact_id(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<Address>, AppError>;

    /// Returns every address of a contact, oldest first. Unpaginated.
    async fn find_all_by_contact_id(
        &self,
        conn: &mut PgConnection,
        contact_id: Uuid,
    ) -> Result<Vec<Address>, AppError>;

    /// Inserts a new address row and returns it as stored, database-assigned
    /// timestamps included.
    async fn create(&self, conn: &mut PgConnection, address: &Address)
    -> Result<Address, AppError>;

    /// Persists the mutable fields of an existing address and returns the
    /// stored row.
    async fn update(&self, conn: &mut PgConnection, address: &Address)
    -> Result<Address, AppError>;

    /// Deletes an address row.
    async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> Result<(), AppError>;
}
