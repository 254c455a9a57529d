//! Shared application state.

use std::sync::Arc;

use crate::application::services::{AddressService, ContactService, UserService};

/// Handles passed explicitly to every handler; there is no global state
/// beyond this and the process-wide tracing subscriber.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub contact_service: Arc<ContactService>,
    pub address_service: Arc<AddressService>,
}
