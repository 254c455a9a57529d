//! PostgreSQL implementation of the contact repository.

use async_trait::async_trait;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entities::{Contact, ContactFilter};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// PostgreSQL repository for contacts.
pub struct PgContactRepository;

impl PgContactRepository {
    pub fn new() -> Self {
        Self
    }

    /// Appends the shared WHERE clause for search and count so both queries
    /// always see the same result set.
    fn push_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ContactFilter) {
        builder.push(" WHERE user_id = ").push_bind(&filter.user_id);

        if let Some(name) = &filter.name {
            let pattern = format!("%{name}%");
            builder
                .push(" AND (first_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR last_name ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(phone) = &filter.phone {
            builder
                .push(" AND phone ILIKE ")
                .push_bind(format!("%{phone}%"));
        }

        if let Some(email) = &filter.email {
            builder
                .push(" AND email ILIKE ")
                .push_bind(format!("%{email}%"));
        }
    }
}

impl Default for PgContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn find_by_id_and_user_id(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        user_id: &str,
    ) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            "SELECT id, user_id, first_name, last_name, email, phone, created_at, updated_at
             FROM contacts WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(conn)
        .await?;

        Ok(contact)
    }

    async fn create(
        &self,
        conn: &mut PgConnection,
        contact: &Contact,
    ) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (id, user_id, first_name, last_name, email, phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, user_id, first_name, last_name, email, phone, created_at, updated_at",
        )
        .bind(contact.id)
        .bind(&contact.user_id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .fetch_one(conn)
        .await?;

        Ok(contact)
    }

    async fn update(
        &self,
        conn: &mut PgConnection,
        contact: &Contact,
    ) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            "UPDATE contacts
             SET first_name = $2, last_name = $3, email = $4, phone = $5, updated_at = NOW()
             WHERE id = $1
             RETURNING id, user_id, first_name, last_name, email, phone, created_at, updated_at",
        )
        .bind(contact.id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .fetch_one(conn)
        .await?;

        Ok(contact)
    }

    async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }

    async fn search(
        &self,
        conn: &mut PgConnection,
        filter: &ContactFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Contact>, AppError> {
        let mut builder = QueryBuilder::new(
            "SELECT id, user_id, first_name, last_name, email, phone, created_at, updated_at
             FROM contacts",
        );
        Self::push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let contacts = builder
            .build_query_as::<Contact>()
            .fetch_all(conn)
            .await?;

        Ok(contacts)
    }

    async fn count(
        &self,
        conn: &mut PgConnection,
        filter: &ContactFilter,
    ) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM contacts");
        Self::push_filter(&mut builder, filter);

        let total: i64 = builder.build_query_scalar().fetch_one(conn).await?;

        Ok(total)
    }
}
