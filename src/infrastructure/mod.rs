//! Infrastructure layer: concrete database adapters.

pub mod persistence;
