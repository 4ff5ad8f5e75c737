//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the PostgreSQL database layer.
//!
//! Each adapter:
//! - Implements the domain's port trait
//! - Uses the repository layer for database operations
//! - Translates database errors into `PortError`

pub mod claims;

pub use claims::PostgresClaimStore;
