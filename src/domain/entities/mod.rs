//! Core business entities.

pub mod address;
pub mod contact;
pub mod user;

pub use address::Address;
pub use contact::{Contact, ContactFilter};
pub use user::User;
