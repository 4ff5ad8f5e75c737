//! Strongly-typed identifiers for claims
//!
//! A claim has two identities: the row key assigned by the store and the
//! tracking identifier handed back to the submitter. The tracking identifier
//! is always derived from the row key, so it is unique whenever the key is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shown in front of every tracking identifier
pub const TRACKING_PREFIX: &str = "GW";

/// Zero-padded digit width after the prefix
const TRACKING_WIDTH: usize = 6;

/// Errors raised when parsing identifiers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Invalid claim id: {0}")]
    InvalidClaimId(String),

    #[error("Invalid tracking id: {0}")]
    InvalidTrackingId(String),
}

/// Store-assigned claim identifier
///
/// Values are positive and monotonically increasing in insertion order. They
/// are never reused, even if rows are removed by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(i64);

impl ClaimId {
    /// Wraps a raw key returned by the store
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw key
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Derives the human-facing tracking identifier
    pub fn tracking_id(&self) -> TrackingId {
        TrackingId::from(*self)
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClaimId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(IdentifierError::InvalidClaimId(s.to_string())),
        }
    }
}

impl From<ClaimId> for i64 {
    fn from(id: ClaimId) -> i64 {
        id.0
    }
}

/// Human-facing tracking identifier, e.g. `GW-000042`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackingId(ClaimId);

impl TrackingId {
    /// Returns the claim this tracking identifier points at
    pub fn claim_id(&self) -> ClaimId {
        self.0
    }
}

impl From<ClaimId> for TrackingId {
    fn from(id: ClaimId) -> Self {
        Self(id)
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:0width$}",
            TRACKING_PREFIX,
            self.0.value(),
            width = TRACKING_WIDTH
        )
    }
}

impl FromStr for TrackingId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IdentifierError::InvalidTrackingId(s.to_string());

        let digits = s
            .trim()
            .strip_prefix(TRACKING_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(invalid)?;

        if digits.len() < TRACKING_WIDTH || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let id: ClaimId = digits.parse().map_err(|_| invalid())?;

        // Only the canonical rendering resolves, so each claim has one tracking id
        if format!("{:0width$}", id.value(), width = TRACKING_WIDTH) != digits {
            return Err(invalid());
        }
        Ok(Self(id))
    }
}

impl Serialize for TrackingId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TrackingId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_id_is_zero_padded() {
        let id = ClaimId::new(42);
        assert_eq!(id.tracking_id().to_string(), "GW-000042");
    }

    #[test]
    fn test_tracking_id_grows_past_width() {
        let id = ClaimId::new(12_345_678);
        assert_eq!(id.tracking_id().to_string(), "GW-12345678");
    }

    #[test]
    fn test_tracking_id_parsing() {
        let parsed: TrackingId = "GW-000042".parse().unwrap();
        assert_eq!(parsed.claim_id(), ClaimId::new(42));
    }

    #[test]
    fn test_tracking_id_rejects_garbage() {
        assert!("000042".parse::<TrackingId>().is_err());
        assert!("GW-42".parse::<TrackingId>().is_err());
        assert!("GW-000000".parse::<TrackingId>().is_err());
        assert!("GW-00004x".parse::<TrackingId>().is_err());
        assert!("XX-000042".parse::<TrackingId>().is_err());
    }

    #[test]
    fn test_tracking_id_requires_canonical_padding() {
        assert!("GW-0000042".parse::<TrackingId>().is_err());
        assert!("GW-0012345678".parse::<TrackingId>().is_err());

        let wide: TrackingId = "GW-1234567".parse().unwrap();
        assert_eq!(wide.claim_id(), ClaimId::new(1_234_567));
    }
}
