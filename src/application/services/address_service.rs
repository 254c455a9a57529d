//! Address use-cases: CRUD plus the unpaginated list.
//!
//! Every operation first re-verifies the ownership chain: the parent
//! contact must exist and belong to the requesting user, otherwise the
//! whole request is a NotFound regardless of the address id.

use std::sync::Arc;

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::address::{AddressResponse, CreateAddressRequest, UpdateAddressRequest};
use crate::domain::entities::{Address, Contact};
use crate::domain::repositories::{AddressRepository, ContactRepository};
use crate::error::AppError;

/// Orchestrates address operations under the User → Contact → Address chain.
pub struct AddressService {
    pool: PgPool,
    contacts: Arc<dyn ContactRepository>,
    addresses: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(
        pool: PgPool,
        contacts: Arc<dyn ContactRepository>,
        addresses: Arc<dyn AddressRepository>,
    ) -> Self {
        Self {
            pool,
            contacts,
            addresses,
        }
    }

    /// Resolves the parent contact for the requesting user or fails the
    /// ownership chain with NotFound.
    async fn owned_contact(
        &self,
        conn: &mut PgConnection,
        user_id: &str,
        contact_id: Uuid,
    ) -> Result<Contact, AppError> {
        self.contacts
            .find_by_id_and_user_id(conn, contact_id, user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(contact_id = %contact_id, "contact not found for user");
                AppError::not_found("contact not found")
            })
    }

    pub async fn create(
        &self,
        user_id: &str,
        contact_id: Uuid,
        request: CreateAddressRequest,
    ) -> Result<AddressResponse, AppError> {
        request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid create address request");
        })?;

        let mut tx = self.pool.begin().await?;

        let contact = self.owned_contact(&mut tx, user_id, contact_id).await?;

        let now = chrono::Utc::now();
        let address = Address {
            id: Uuid::new_v4(),
            contact_id: contact.id,
            street: request.street,
            city: request.city,
            province: request.province,
            postal_code: request.postal_code,
            country: request.country,
            created_at: now,
            updated_at: now,
        };
        let address = self.addresses.create(&mut tx, &address).await?;

        tx.commit().await?;

        Ok(AddressResponse::from(&address))
    }

    pub async fn get(
        &self,
        user_id: &str,
        contact_id: Uuid,
        id: Uuid,
    ) -> Result<AddressResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        self.owned_contact(&mut tx, user_id, contact_id).await?;

        let address = self
            .addresses
            .find_by_id_and_contact_id(&mut tx, id, contact_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(address_id = %id, "address not found for contact");
                AppError::not_found("address not found")
            })?;

        tx.commit().await?;

        Ok(AddressResponse::from(&address))
    }

    pub async fn update(
        &self,
        user_id: &str,
        contact_id: Uuid,
        id: Uuid,
        request: UpdateAddressRequest,
    ) -> Result<AddressResponse, AppError> {
        request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid update address request");
        })?;

        let mut tx = self.pool.begin().await?;

        let contact = self.owned_contact(&mut tx, user_id, contact_id).await?;

        let mut address = self
            .addresses
            .find_by_id_and_contact_id(&mut tx, id, contact.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(address_id = %id, "address not found for contact");
                AppError::not_found("address not found")
            })?;

        address.street = request.street;
        address.city = request.city;
        address.province = request.province;
        address.postal_code = request.postal_code;
        address.country = request.country;
        let address = self.addresses.update(&mut tx, &address).await?;

        tx.commit().await?;

        Ok(AddressResponse::from(&address))
    }

    pub async fn delete(&self, user_id: &str, contact_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.owned_contact(&mut tx, user_id, contact_id).await?;

        let address = self
            .addresses
            .find_by_id_and_contact_id(&mut tx, id, contact_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(address_id = %id, "address not found for contact");
                AppError::not_found("address not found")
            })?;

        self.addresses.delete(&mut tx, address.id).await?;

        tx.commit().await?;

        Ok(())
    }

    /// All addresses of one contact, unpaginated.
    pub async fn list(
        &self,
        user_id: &str,
        contact_id: Uuid,
    ) -> Result<Vec<AddressResponse>, AppError> {
        let mut tx = self.pool.begin().await?;

        let contact = self.owned_contact(&mut tx, user_id, contact_id).await?;

        let addresses = self
            .addresses
            .find_all_by_contact_id(&mut tx, contact.id)
            .await?;

        tx.commit().await?;

        Ok(addresses.iter().map(AddressResponse::from).collect())
    }
}
