//! Repository implementations
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types. Every method issues a single statement, so each write is
//! atomic on its own.

pub mod claims;

pub use claims::{ClaimRow, ClaimsRepository};
