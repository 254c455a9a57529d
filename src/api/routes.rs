//! Route configuration.
//!
//! Two groups: a public one for registration and login, and an
//! authenticated one for everything else, gated by
//! [`crate::api::middleware::auth`].

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    create_address_handler, create_contact_handler, current_user_handler, delete_address_handler,
    delete_contact_handler, get_address_handler, get_contact_handler, list_addresses_handler,
    login_handler, logout_handler, register_handler, search_contacts_handler,
    update_address_handler, update_contact_handler, update_user_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;

/// Builds the full application router.
///
/// # Endpoints
///
/// Public:
/// - `POST /api/users`        - register
/// - `POST /api/users/_login` - login
///
/// Authenticated:
/// - `DELETE /api/users`                                        - logout
/// - `GET/PATCH /api/users/_current`                            - profile
/// - `GET/POST /api/contacts`                                   - search / create
/// - `GET/PUT/DELETE /api/contacts/{contactId}`                 - single contact
/// - `GET/POST /api/contacts/{contactId}/addresses`             - list / create
/// - `GET/PUT/DELETE /api/contacts/{contactId}/addresses/{addressId}`
pub fn app_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/users", post(register_handler))
        .route("/api/users/_login", post(login_handler));

    let authenticated = Router::new()
        .route("/api/users", delete(logout_handler))
        .route(
            "/api/users/_current",
            get(current_user_handler).patch(update_user_handler),
        )
        .route(
            "/api/contacts",
            get(search_contacts_handler).post(create_contact_handler),
        )
        .route(
            "/api/contacts/{contactId}",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler),
        )
        .route(
            "/api/contacts/{contactId}/addresses",
            get(list_addresses_handler).post(create_address_handler),
        )
        .route(
            "/api/contacts/{contactId}/addresses/{addressId}",
            get(get_address_handler)
                .put(update_address_handler)
                .delete(delete_address_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    public
        .merge(authenticated)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
