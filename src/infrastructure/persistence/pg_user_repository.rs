//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgConnection;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for accounts.
///
/// Stateless; every call operates on the transaction handed in by the
/// use-case layer.
pub struct PgUserRepository;

impl PgUserRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(
        &self,
        conn: &mut PgConnection,
        id: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, password, token, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    async fn find_by_token(
        &self,
        conn: &mut PgConnection,
        token: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, password, token, created_at, updated_at
             FROM users WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    async fn count_by_id(&self, conn: &mut PgConnection, id: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(conn)
            .await?;

        Ok(count)
    }

    async fn create(&self, conn: &mut PgConnection, user: &User) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, password, token) VALUES ($1, $2, $3, $4)
             RETURNING id, name, password, token, created_at, updated_at",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.password)
        .bind(&user.token)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }

    async fn update(&self, conn: &mut PgConnection, user: &User) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET name = $2, password = $3, token = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING id, name, password, token, created_at, updated_at",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.password)
        .bind(&user.token)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }
}
