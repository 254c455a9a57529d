//! REST API layer: DTOs, handlers, middleware and routes.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
