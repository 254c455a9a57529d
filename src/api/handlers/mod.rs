//! HTTP request handlers, grouped per entity.

pub mod addresses;
pub mod contacts;
pub mod users;

pub use addresses::{
    create_address_handler, delete_address_handler, get_address_handler, list_addresses_handler,
    update_address_handler,
};
pub use contacts::{
    create_contact_handler, delete_contact_handler, get_contact_handler, search_contacts_handler,
    update_contact_handler,
};
pub use users::{
    current_user_handler, login_handler, logout_handler, register_handler, update_user_handler,
};
