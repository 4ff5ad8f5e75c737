//! Claim store doubles
//!
//! Lets HTTP and domain tests run without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use core_kernel::{
    AdapterHealth, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_claims::{Claim, ClaimStore, NewClaim};

/// Store that keeps claims in memory, assigning increasing ids
#[derive(Debug, Default)]
pub struct InMemoryClaimStore {
    claims: Mutex<Vec<Claim>>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding the given claims
    pub fn with_claims(claims: Vec<Claim>) -> Self {
        Self {
            claims: Mutex::new(claims),
        }
    }

    /// Number of stored claims
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Claim>> {
        self.claims.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl HealthCheckable for InMemoryClaimStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "in-memory-claim-store".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn init_schema(&self) -> Result<(), PortError> {
        Ok(())
    }

    async fn insert(&self, claim: NewClaim) -> Result<ClaimId, PortError> {
        let mut claims = self.lock();
        let next = claims.iter().map(|c| c.id.value()).max().unwrap_or(0) + 1;
        let id = ClaimId::new(next);
        claims.push(Claim::from_new(id, Utc::now(), claim));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Claim>, PortError> {
        let mut claims = self.lock().clone();
        claims.sort_by(|a, b| {
            b.claim_date
                .cmp(&a.claim_date)
                .then_with(|| b.id.value().cmp(&a.id.value()))
        });
        Ok(claims)
    }

    async fn find(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.lock().iter().find(|c| c.id == id).cloned())
    }
}

/// Store whose every operation fails as if the database were unreachable
#[derive(Debug, Clone)]
pub struct FailingClaimStore {
    message: String,
}

impl FailingClaimStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> PortError {
        PortError::connection(self.message.clone())
    }
}

impl Default for FailingClaimStore {
    fn default() -> Self {
        Self::new("connection refused")
    }
}

impl DomainPort for FailingClaimStore {}

#[async_trait]
impl HealthCheckable for FailingClaimStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "failing-claim-store".to_string(),
            status: AdapterHealth::Unhealthy,
            latency_ms: 0,
            message: Some(self.message.clone()),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimStore for FailingClaimStore {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ClaimFixtures;

    #[tokio::test]
    async fn test_in_memory_assigns_increasing_ids() {
        let store = InMemoryClaimStore::new();
        let first = store.insert(ClaimFixtures::new_claim()).await.unwrap();
        let second = store.insert(ClaimFixtures::new_claim()).await.unwrap();

        assert!(second.value() > first.value());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_in_memory_lists_newest_first() {
        let store = InMemoryClaimStore::with_claims(vec![
            ClaimFixtures::stored(1),
            ClaimFixtures::stored(2),
        ]);

        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_failing_store_reports_connection_errors() {
        let store = FailingClaimStore::default();
        let err = store.list().await.unwrap_err();

        assert!(err.is_transient());
        assert!(!store.health_check().await.is_healthy());
    }
}
