//! Domain layer - Repository ports and transfer types
//!
//! Trait definitions only; the SeaORM implementations live in the
//! infrastructure layer.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
