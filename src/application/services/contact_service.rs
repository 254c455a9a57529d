//! Contact use-cases: CRUD plus the paginated, filtered search.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::contact::{
    ContactResponse, CreateContactRequest, SearchContactParams, UpdateContactRequest,
};
use crate::domain::entities::{Contact, ContactFilter};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Orchestrates contact operations, all scoped to the authenticated owner.
pub struct ContactService {
    pool: PgPool,
    contacts: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(pool: PgPool, contacts: Arc<dyn ContactRepository>) -> Self {
        Self { pool, contacts }
    }

    pub async fn create(
        &self,
        user_id: &str,
        request: CreateContactRequest,
    ) -> Result<ContactResponse, AppError> {
        request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid create contact request");
        })?;

        let mut tx = self.pool.begin().await?;

        let now = chrono::Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            created_at: now,
            updated_at: now,
        };
        let contact = self.contacts.create(&mut tx, &contact).await?;

        tx.commit().await?;

        Ok(ContactResponse::from(&contact))
    }

    pub async fn get(&self, user_id: &str, id: Uuid) -> Result<ContactResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let contact = self
            .contacts
            .find_by_id_and_user_id(&mut tx, id, user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(contact_id = %id, "contact not found for user");
                AppError::not_found("contact not found")
            })?;

        tx.commit().await?;

        Ok(ContactResponse::from(&contact))
    }

    /// Full replacement of a contact's fields. The contact must already
    /// exist for this user before the new values are validated.
    pub async fn update(
        &self,
        user_id: &str,
        id: Uuid,
        request: UpdateContactRequest,
    ) -> Result<ContactResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut contact = self
            .contacts
            .find_by_id_and_user_id(&mut tx, id, user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(contact_id = %id, "contact not found for user");
                AppError::not_found("contact not found")
            })?;

        request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid update contact request");
        })?;

        contact.first_name = request.first_name;
        contact.last_name = request.last_name;
        contact.email = request.email;
        contact.phone = request.phone;
        let contact = self.contacts.update(&mut tx, &contact).await?;

        tx.commit().await?;

        Ok(ContactResponse::from(&contact))
    }

    pub async fn delete(&self, user_id: &str, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let contact = self
            .contacts
            .find_by_id_and_user_id(&mut tx, id, user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(contact_id = %id, "contact not found for user");
                AppError::not_found("contact not found")
            })?;

        self.contacts.delete(&mut tx, contact.id).await?;

        tx.commit().await?;

        Ok(())
    }

    /// Paginated search. `page` and `size` are the already-resolved values
    /// (1-based, positive). The total is counted with the same filter so
    /// paging metadata matches the result set.
    pub async fn search(
        &self,
        user_id: &str,
        params: &SearchContactParams,
        page: i64,
        size: i64,
    ) -> Result<(Vec<ContactResponse>, i64), AppError> {
        if page < 1 || size < 1 {
            return Err(AppError::bad_request("page and size must be positive"));
        }

        let filter = ContactFilter {
            user_id: user_id.to_string(),
            name: params.name.clone(),
            email: params.email.clone(),
            phone: params.phone.clone(),
        }
        .normalized();

        let mut tx = self.pool.begin().await?;

        let offset = (page - 1).saturating_mul(size);
        let contacts = self.contacts.search(&mut tx, &filter, offset, size).await?;
        let total = self.contacts.count(&mut tx, &filter).await?;

        tx.commit().await?;

        let responses = contacts.iter().map(ContactResponse::from).collect();
        Ok((responses, total))
    }
}
