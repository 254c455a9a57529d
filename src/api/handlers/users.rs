//! Handlers for user endpoints.

use axum::{Extension, extract::State};

use crate::api::dto::WebResponse;
use crate::api::extract::Json;
use crate::api::dto::user::{
    LoginUserRequest, RegisterUserRequest, TokenResponse, UpdateUserRequest, UserResponse,
};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/users` - register a new account.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Json<WebResponse<UserResponse>>, AppError> {
    let response = state
        .user_service
        .register(request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to register user"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `POST /api/users/_login` - exchange credentials for a session token.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginUserRequest>,
) -> Result<Json<WebResponse<TokenResponse>>, AppError> {
    let response = state
        .user_service
        .login(request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to login user"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `GET /api/users/_current` - profile of the authenticated user.
pub async fn current_user_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<WebResponse<UserResponse>>, AppError> {
    let response = state
        .user_service
        .current(&auth.user_id)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to get current user"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `PATCH /api/users/_current` - partial profile update.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<WebResponse<UserResponse>>, AppError> {
    let response = state
        .user_service
        .update(&auth.user_id, request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to update user"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `DELETE /api/users` - logout, clearing the session token.
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<WebResponse<bool>>, AppError> {
    let response = state
        .user_service
        .logout(&auth.user_id)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to logout user"))?;

    Ok(Json(WebResponse::new(response)))
}
