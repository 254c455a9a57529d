//! Handlers for contact endpoints.

use axum::{
    Extension,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::api::dto::contact::{
    ContactResponse, CreateContactRequest, SearchContactParams, UpdateContactRequest,
};
use crate::api::dto::{PageMetadata, WebResponse};
use crate::api::extract::Json;
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/contacts`
pub async fn create_contact_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateContactRequest>,
) -> Result<Json<WebResponse<ContactResponse>>, AppError> {
    let response = state
        .contact_service
        .create(&auth.user_id, request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to create contact"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `GET /api/contacts` - paginated, filtered search scoped to the owner.
pub async fn search_contacts_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<SearchContactParams>,
) -> Result<Json<WebResponse<Vec<ContactResponse>>>, AppError> {
    let page = params.page_or_default();
    let size = params.size_or_default();

    let (responses, total) = state
        .contact_service
        .search(&auth.user_id, &params, page, size)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to search contacts"))?;

    let paging = PageMetadata::new(page, size, total);
    Ok(Json(WebResponse::with_paging(responses, paging)))
}

/// `GET /api/contacts/{contactId}`
pub async fn get_contact_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<Uuid>,
) -> Result<Json<WebResponse<ContactResponse>>, AppError> {
    let response = state
        .contact_service
        .get(&auth.user_id, contact_id)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to get contact"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `PUT /api/contacts/{contactId}`
pub async fn update_contact_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<Uuid>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<WebResponse<ContactResponse>>, AppError> {
    let response = state
        .contact_service
        .update(&auth.user_id, contact_id, request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to update contact"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `DELETE /api/contacts/{contactId}`
pub async fn delete_contact_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<Uuid>,
) -> Result<Json<WebResponse<bool>>, AppError> {
    state
        .contact_service
        .delete(&auth.user_id, contact_id)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to delete contact"))?;

    Ok(Json(WebResponse::new(true)))
}
