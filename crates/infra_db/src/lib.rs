//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL claim store using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern:
//! - [`repositories::ClaimsRepository`] owns the SQL
//! - [`adapters::PostgresClaimStore`] implements the domain's `ClaimStore`
//!   port on top of it and translates errors
//! - [`schema`] holds the idempotent schema setup and the operator-triggered
//!   migration of legacy column layouts
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresClaimStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/giveaway")).await?;
//! let store = PostgresClaimStore::new(pool);
//! store.init_schema().await?;
//! ```

pub mod pool;
pub mod error;
pub mod schema;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_lazy_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use schema::{init_schema, migrate_legacy_schema, MigrationReport};
pub use adapters::PostgresClaimStore;
