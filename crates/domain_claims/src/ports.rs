//! Claim store port
//!
//! The HTTP layer only ever talks to [`ClaimStore`]. The PostgreSQL adapter
//! lives in `infra_db`; [`UnconfiguredStore`] stands in when no database is
//! configured so the service can still start and answer liveness checks.

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{
    AdapterHealth, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use crate::claim::{Claim, NewClaim};

/// Durable, append-only storage for claims
#[async_trait]
pub trait ClaimStore: DomainPort + HealthCheckable {
    /// Ensures the backing schema exists
    ///
    /// Must be safe to call on every start: existing rows are never touched.
    async fn init_schema(&self) -> Result<(), PortError>;

    /// Appends a claim, returning the identifier assigned by the store
    ///
    /// Either the whole claim is written or nothing is.
    async fn insert(&self, claim: NewClaim) -> Result<ClaimId, PortError>;

    /// Returns every claim, most recent first
    ///
    /// An empty store yields an empty list.
    async fn list(&self) -> Result<Vec<Claim>, PortError>;

    /// Looks up a single claim
    async fn find(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;
}

/// Store installed when no database connection string is configured
///
/// Every operation fails with [`PortError::NotConfigured`].
#[derive(Debug, Clone)]
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> PortError {
        PortError::not_configured(self.reason.clone())
    }
}

impl Default for UnconfiguredStore {
    fn default() -> Self {
        Self::new("database connection string is not set")
    }
}

impl DomainPort for UnconfiguredStore {}

#[async_trait]
impl HealthCheckable for UnconfiguredStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "unconfigured-claim-store".to_string(),
            status: AdapterHealth::Unconfigured,
            latency_ms: 0,
            message: Some(self.reason.clone()),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimStore for UnconfiguredStore {
    async fn init_schema(&self) -> Result<(), PortError> {
        Err(self.error())
    }

    async fn insert(&self, _claim: NewClaim) -> Result<ClaimId, PortError> {
        Err(self.error())
    }

    async fn list(&self) -> Result<Vec<Claim>, PortError> {
        Err(self.error())
    }

    async fn find(&self, _id: ClaimId) -> Result<Option<Claim>, PortError> {
        Err(self.error())
    }
}
