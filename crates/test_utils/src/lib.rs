//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! giveaway claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built submissions and claims
//! - `builders`: Builder for claim submissions
//! - `stores`: In-memory and failing `ClaimStore` doubles
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertion helpers for claims
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stores;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stores::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
