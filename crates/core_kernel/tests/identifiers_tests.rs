//! Unit tests for claim and tracking identifiers
//!
//! Tests cover derivation, display formatting, parsing, and the
//! one-to-one mapping between row keys and tracking identifiers.

use core_kernel::{ClaimId, IdentifierError, TrackingId};
use proptest::prelude::*;

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        let id = ClaimId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn test_ordering_follows_insertion() {
        assert!(ClaimId::new(1) < ClaimId::new(2));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!("0".parse::<ClaimId>().is_err());
        assert!("-3".parse::<ClaimId>().is_err());
        assert_eq!("12".parse::<ClaimId>().unwrap(), ClaimId::new(12));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ClaimId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}

mod tracking_id_tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(ClaimId::new(1).tracking_id().to_string(), "GW-000001");
    }

    #[test]
    fn test_parse_with_surrounding_whitespace() {
        let parsed: TrackingId = "  GW-000123 ".parse().unwrap();
        assert_eq!(parsed.claim_id(), ClaimId::new(123));
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = "GW-abc".parse::<TrackingId>().unwrap_err();
        assert_eq!(err, IdentifierError::InvalidTrackingId("GW-abc".to_string()));
    }

    #[test]
    fn test_serde_uses_display_form() {
        let tracking = ClaimId::new(99).tracking_id();
        let json = serde_json::to_string(&tracking).unwrap();
        assert_eq!(json, "\"GW-000099\"");

        let back: TrackingId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tracking);
    }

    #[test]
    fn test_distinct_claims_have_distinct_tracking_ids() {
        let a = ClaimId::new(41).tracking_id();
        let b = ClaimId::new(42).tracking_id();
        assert_ne!(a.to_string(), b.to_string());
    }
}

proptest! {
    #[test]
    fn prop_tracking_id_recovers_claim_id(raw in 1i64..=i64::MAX) {
        let id = ClaimId::new(raw);
        let parsed: TrackingId = id.tracking_id().to_string().parse().unwrap();
        prop_assert_eq!(parsed.claim_id(), id);
    }
}
