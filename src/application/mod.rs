//! Application layer: use-case services.

pub mod services;
