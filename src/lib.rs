pub mod domain;
pub mod infrastructure;
pub mod models;

pub use domain::DomainError;
pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::seed;
pub use infrastructure::{PortalDbContext, PortalRepositories};
