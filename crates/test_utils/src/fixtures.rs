//! Pre-built Test Fixtures
//!
//! Ready-to-use submissions and claims. Values are fixed so assertions stay
//! predictable.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClaimId, ShippingFee};
use domain_claims::{Claim, NewClaim, Prize, PrizeSelection};
use serde_json::{json, Value};

/// Fixture for request bodies posted by the web client
pub struct SubmissionFixtures;

impl SubmissionFixtures {
    /// The canonical happy-path submission
    pub fn jane_doe() -> Value {
        json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "fullAddress": "1 Main St",
            "selectedPrizes": [{ "name": "Mug" }],
            "totalFee": 1500
        })
    }

    /// A submission that omits `fullName`
    pub fn missing_full_name() -> Value {
        json!({
            "email": "a@b.com",
            "fullAddress": "x",
            "selectedPrizes": [],
            "totalFee": 0
        })
    }

    /// A submission with every optional field filled in
    pub fn complete() -> Value {
        json!({
            "fullName": "Chidi Okafor",
            "email": "chidi@example.com",
            "phone": "+2348030000000",
            "city": "Enugu",
            "fullAddress": "12 Ogui Road",
            "selectedPrizes": [
                { "name": "Headphones", "value": 25000 },
                { "name": "Power Bank", "value": 12000 }
            ],
            "totalFee": 3500
        })
    }
}

/// Fixture for validated and stored claims
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A validated claim for Jane Doe
    pub fn new_claim() -> NewClaim {
        NewClaim {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            city: None,
            full_address: "1 Main St".to_string(),
            selected_prizes: PrizeSelection::new(vec![Prize::named("Mug")]),
            total_fee: ShippingFee::from_units(1500),
        }
    }

    /// Fixed claim date (Mar 1, 2026 09:00 UTC)
    pub fn claim_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    /// A stored claim with the given id
    pub fn stored(id: i64) -> Claim {
        Claim::from_new(ClaimId::new(id), Self::claim_date(), Self::new_claim())
    }
}
