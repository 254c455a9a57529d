//! Domain layer: entities and repository contracts.
//!
//! Has no dependency on the HTTP or persistence layers. Repository traits
//! define the data-access contract implemented under
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
