//! Data Transfer Objects for API requests and responses.
//!
//! Request shapes carry `validator` constraints checked by the use-case
//! layer; responses are distinct from the persisted entities.

pub mod address;
pub mod contact;
pub mod envelope;
pub mod user;

pub use envelope::{PageMetadata, WebResponse};
