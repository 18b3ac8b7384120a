//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Database connection and schema (db)
//! - Reference data seeding (seed)
//! - Configuration loading (config)
//! - The unit of work shared by repositories (context)
//! - Repository implementations (repositories)
//! - The repository bundle handed to callers (state)

pub mod config;
pub mod context;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod state;

pub use context::PortalDbContext;
pub use repositories::*;
pub use state::PortalRepositories;
