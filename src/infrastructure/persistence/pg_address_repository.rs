//! PostgreSQL implementation of the address repository.

use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::domain::entities::Address;
use crate::domain::repositories::AddressRepository;
use crate::error::AppError;

/// PostgreSQL repository for addresses.
pub struct PgAddressRepository;

impl PgAddressRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgAddressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn find_by_id_and_contact_id(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<Address>, AppError> {
        let address = sqlx::query_as::<_, Address>(
            "SELECT id, contact_id, street, city, province, postal_code, country,
                    created_at, updated_at
             FROM addresses WHERE id = $1 AND contact_id = $2",
        )
        .bind(id)
        .bind(contact_id)
        .fetch_optional(conn)
        .await?;

        Ok(address)
    }

    async fn find_all_by_contact_id(
        &self,
        conn: &mut PgConnection,
        contact_id: Uuid,
    ) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, contact_id, street, city, province, postal_code, country,
                    created_at, updated_at
             FROM addresses WHERE contact_id = $1
             ORDER BY created_at",
        )
        .bind(contact_id)
        .fetch_all(conn)
        .await?;

        Ok(addresses)
    }

    async fn create(
        &self,
        conn: &mut PgConnection,
        address: &Address,
    ) -> Result<Address, AppError> {
        let address = sqlx::query_as::<_, Address>(
            "INSERT INTO addresses (id, contact_id, street, city, province, postal_code, country)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, contact_id, street, city, province, postal_code, country,
                       created_at, updated_at",
        )
        .bind(address.id)
        .bind(address.contact_id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.postal_code)
        .bind(&address.country)
        .fetch_one(conn)
        .await?;

        Ok(address)
    }

    async fn update(
        &self,
        conn: &mut PgConnection,
        address: &Address,
    ) -> Result<Address, AppError> {
        let address = sqlx::query_as::<_, Address>(
            "UPDATE addresses
             SET street = $2, city = $3, province = $4, postal_code = $5, country = $6,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING id, contact_id, street, city, province, postal_code, country,
                       created_at, updated_at",
        )
        .bind(address.id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.postal_code)
        .bind(&address.country)
        .fetch_one(conn)
        .await?;

        Ok(address)
    }

    async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
