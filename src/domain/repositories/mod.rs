//! Data-access trait definitions.
//!
//! Every method takes the active transaction's connection so that each
//! use-case operation runs inside exactly one request-scoped transaction.

pub mod address_repository;
pub mod contact_repository;
pub mod user_repository;

pub use address_repository::AddressRepository;
pub use contact_repository::ContactRepository;
pub use user_repository::UserRepository;
