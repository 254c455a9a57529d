//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Placeholder used when the Authorization header is absent. It never
/// matches a stored token.
const MISSING_TOKEN: &str = "NOT_FOUND";

/// The authenticated identity, inserted into request extensions for
/// downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Authenticates requests by resolving the raw `Authorization` header value
/// to a user through the user service.
///
/// On failure the request short-circuits with `401 Unauthorized` before
/// reaching any handler. Tokens do not expire; only logout invalidates them.
pub async fn layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(MISSING_TOKEN)
        .to_string();

    let user_id = state.user_service.verify(&token).await.map_err(|e| {
        tracing::warn!(error = %e, "token verification failed");
        AppError::unauthorized("invalid or missing token")
    })?;

    tracing::debug!(user_id = %user_id, "request authenticated");
    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}
