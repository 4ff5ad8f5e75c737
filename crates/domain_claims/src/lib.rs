//! Giveaway Claims Domain
//!
//! This crate models a giveaway claim: the contact details of the winner,
//! the prizes they picked, and the shipping fee they were quoted.
//!
//! # Claim Lifecycle
//!
//! ```text
//! ClaimSubmission --validate--> NewClaim --ClaimStore::insert--> Claim
//! ```
//!
//! Claims are append-only. Once stored they are read back through
//! [`ClaimStore::list`] and never mutated.

pub mod claim;
pub mod prize;
pub mod submission;
pub mod listing;
pub mod ports;
pub mod error;

pub use claim::{Claim, NewClaim};
pub use prize::{Prize, PrizeSelection};
pub use submission::ClaimSubmission;
pub use listing::render_plain_text;
pub use ports::{ClaimStore, UnconfiguredStore};
pub use error::ClaimError;
