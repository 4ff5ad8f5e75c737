//! Core Kernel - Foundational types for the giveaway claims service
//!
//! This crate provides the building blocks shared by every layer:
//! - Claim identifiers and the human-facing tracking identifier
//! - Shipping fees with precise decimal arithmetic
//! - Port abstractions used between the domain and its adapters

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{ShippingFee, Currency, MoneyError};
pub use identifiers::{ClaimId, TrackingId, IdentifierError};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
