//! PostgreSQL repository implementations.

pub mod pg_address_repository;
pub mod pg_contact_repository;
pub mod pg_user_repository;

pub use pg_address_repository::PgAddressRepository;
pub use pg_contact_repository::PgContactRepository;
pub use pg_user_repository::PgUserRepository;
