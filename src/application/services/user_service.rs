//! Account use-cases: register, login, verify, current, logout, update.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::user::{
    LoginUserRequest, RegisterUserRequest, TokenResponse, UpdateUserRequest, UserResponse,
};
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Orchestrates account operations.
///
/// Every method validates the request, runs one transaction, and commits
/// only on the success path; any early return drops the transaction, which
/// rolls it back.
pub struct UserService {
    pool: PgPool,
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(pool: PgPool, users: Arc<dyn UserRepository>) -> Self {
        Self { pool, users }
    }

    /// Registers a new account. The chosen id must be free.
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, AppError> {
        request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid register request");
        })?;

        let mut tx = self.pool.begin().await?;

        if self.users.count_by_id(&mut tx, &request.id).await? > 0 {
            tracing::warn!(user_id = %request.id, "user already registered");
            return Err(AppError::conflict("user already exists"));
        }

        let hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("failed to hash password: {e}")))?;

        let user = User::new(request.id, request.name, hash);
        let user = self.users.create(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(UserResponse::from(&user))
    }

    /// Exchanges credentials for a fresh opaque session token. The token is
    /// regenerated on every successful login.
    pub async fn login(&self, request: LoginUserRequest) -> Result<TokenResponse, AppError> {
        request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid login request");
        })?;

        let mut tx = self.pool.begin().await?;

        let mut user = self
            .users
            .find_by_id(&mut tx, &request.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %request.id, "login for unknown user");
                AppError::unauthorized("invalid credentials")
            })?;

        let matches = bcrypt::verify(&request.password, &user.password).unwrap_or(false);
        if !matches {
            tracing::warn!(user_id = %user.id, "password mismatch");
            return Err(AppError::unauthorized("invalid credentials"));
        }

        let token = Uuid::new_v4().to_string();
        user.token = Some(token.clone());
        self.users.update(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(TokenResponse { token })
    }

    /// Resolves a session token to the owning user id.
    ///
    /// Tokens never expire; they stay valid until logout clears them.
    pub async fn verify(&self, token: &str) -> Result<String, AppError> {
        let mut tx = self.pool.begin().await?;

        let user = self
            .users
            .find_by_token(&mut tx, token)
            .await?
            .ok_or_else(|| AppError::not_found("token does not match any user"))?;

        tx.commit().await?;

        Ok(user.id)
    }

    /// Returns the profile of the authenticated user.
    pub async fn current(&self, user_id: &str) -> Result<UserResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let user = self
            .users
            .find_by_id(&mut tx, user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "current user not found");
                AppError::not_found("user not found")
            })?;

        tx.commit().await?;

        Ok(UserResponse::from(&user))
    }

    /// Clears the stored session token. Safe to repeat.
    pub async fn logout(&self, user_id: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut user = self
            .users
            .find_by_id(&mut tx, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))?;

        user.token = None;
        self.users.update(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(true)
    }

    /// Partial profile update. Only fields present in the request are
    /// overwritten; a supplied password is re-hashed.
    pub async fn update(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid update request");
        })?;

        let mut tx = self.pool.begin().await?;

        let mut user = self
            .users
            .find_by_id(&mut tx, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))?;

        if let Some(name) = request.name {
            user.name = name;
        }

        if let Some(password) = request.password {
            user.password = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
                .map_err(|e| AppError::internal(format!("failed to hash password: {e}")))?;
        }

        let user = self.users.update(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(UserResponse::from(&user))
    }
}
