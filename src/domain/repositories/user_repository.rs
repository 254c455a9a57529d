//! Repository trait for user data access.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgConnection;

/// Repository interface for account storage.
///
/// All methods run on the caller's open transaction; unique lookups return
/// `Ok(None)` on a miss and the use-case layer decides the failure class.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by primary id.
    async fn find_by_id(&self, conn: &mut PgConnection, id: &str)
    -> Result<Option<User>, AppError>;

    /// Finds a user by the currently stored session token.
    async fn find_by_token(
        &self,
        conn: &mut PgConnection,
        token: &str,
    ) -> Result<Option<User>, AppError>;

    /// Counts users with the given id. Used for the duplicate check on
    /// registration.
    async fn count_by_id(&self, conn: &mut PgConnection, id: &str) -> Result<i64, AppError>;

    /// Inserts a new user row and returns it as stored, database-assigned
    /// timestamps included.
    async fn create(&self, conn: &mut PgConnection, user: &User) -> Result<User, AppError>;

    /// Persists name, password hash and token for an existing user and
    /// returns the stored row.
    async fn update(&self, conn: &mut PgConnection, user: &User) -> Result<User, AppError>;
}
