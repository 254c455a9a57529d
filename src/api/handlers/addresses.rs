//! Handlers for address endpoints nested under a contact.

use axum::{
    Extension,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::api::dto::WebResponse;
use crate::api::dto::address::{AddressResponse, CreateAddressRequest, UpdateAddressRequest};
use crate::api::extract::Json;
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/contacts/{contactId}/addresses`
pub async fn create_address_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<Uuid>,
    Json(request): Json<CreateAddressRequest>,
) -> Result<Json<WebResponse<AddressResponse>>, AppError> {
    let response = state
        .address_service
        .create(&auth.user_id, contact_id, request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to create address"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `GET /api/contacts/{contactId}/addresses` - all addresses, unpaginated.
pub async fn list_addresses_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<Uuid>,
) -> Result<Json<WebResponse<Vec<AddressResponse>>>, AppError> {
    let responses = state
        .address_service
        .list(&auth.user_id, contact_id)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to list addresses"))?;

    Ok(Json(WebResponse::new(responses)))
}

/// `GET /api/contacts/{contactId}/addresses/{addressId}`
pub async fn get_address_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((contact_id, address_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<WebResponse<AddressResponse>>, AppError> {
    let response = state
        .address_service
        .get(&auth.user_id, contact_id, address_id)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to get address"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `PUT /api/contacts/{contactId}/addresses/{addressId}`
pub async fn update_address_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((contact_id, address_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateAddressRequest>,
) -> Result<Json<WebResponse<AddressResponse>>, AppError> {
    let response = state
        .address_service
        .update(&auth.user_id, contact_id, address_id, request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to update address"))?;

    Ok(Json(WebResponse::new(response)))
}

/// `DELETE /api/contacts/{contactId}/addresses/{addressId}`
pub async fn delete_address_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((contact_id, address_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<WebResponse<bool>>, AppError> {
    state
        .address_service
        .delete(&auth.user_id, contact_id, address_id)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "failed to delete address"))?;

    Ok(Json(WebResponse::new(true)))
}
