//! Comprehensive tests for domain_claims

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimError, ClaimSubmission, PrizeSelection};

fn valid_body() -> Value {
    json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+2348012345678",
        "city": "Lagos",
        "fullAddress": "1 Main St",
        "selectedPrizes": [{ "name": "Mug" }, { "name": "Tote Bag", "value": 4000 }],
        "totalFee": 1500
    })
}

fn validate(body: Value) -> Result<domain_claims::NewClaim, ClaimError> {
    serde_json::from_value::<ClaimSubmission>(body)
        .expect("body should deserialize")
        .validate()
}

// ============================================================================
// Submission Tests
// ============================================================================

mod submission_tests {
    use super::*;

    #[test]
    fn test_full_submission_is_accepted() {
        let claim = validate(valid_body()).unwrap();

        assert_eq!(claim.full_name, "Jane Doe");
        assert_eq!(claim.phone.as_deref(), Some("+2348012345678"));
        assert_eq!(claim.total_fee.amount(), dec!(1500));
        assert_eq!(claim.selected_prizes.len(), 2);
    }

    #[test]
    fn test_each_mandatory_field_is_enforced() {
        for field in ["fullName", "email", "fullAddress", "selectedPrizes", "totalFee"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);

            let err = validate(body).unwrap_err();
            assert_eq!(err, ClaimError::MissingFields(vec![field]), "field {field}");
        }
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("phone");
        body.as_object_mut().unwrap().remove("city");

        let claim = validate(body).unwrap();
        assert!(claim.phone.is_none());
        assert!(claim.city.is_none());
    }

    #[test]
    fn test_prize_shape_error_names_field() {
        let mut body = valid_body();
        body["selectedPrizes"] = json!([{ "value": 1 }]);

        let err = validate(body).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidField { field: "selectedPrizes", .. }));
    }

    #[test]
    fn test_negative_fee_is_rejected() {
        let mut body = valid_body();
        body["totalFee"] = json!(-500);

        let err = validate(body).unwrap_err();
        assert_eq!(err.fields(), vec!["totalFee"]);
    }

    #[test]
    fn test_fee_above_store_limit_is_rejected() {
        let mut body = valid_body();
        body["totalFee"] = json!(10_000_000_000u64);

        let err = validate(body).unwrap_err();
        assert_eq!(err.fields(), vec!["totalFee"]);
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_stored_prizes_round_trip_verbatim() {
        let body = valid_body();
        let expected = body["selectedPrizes"].clone();

        let claim = Claim::from_new(ClaimId::new(1), Utc::now(), validate(body).unwrap());

        assert_eq!(claim.selected_prizes, expected);
        assert_eq!(claim.prize_names(), vec!["Mug", "Tote Bag"]);
    }

    #[test]
    fn test_claim_serializes_selection_unchanged() {
        let claim = Claim::from_new(ClaimId::new(9), Utc::now(), validate(valid_body()).unwrap());
        let json = serde_json::to_value(&claim).unwrap();

        assert_eq!(json["selected_prizes"][1]["value"], 4000);
        assert_eq!(json["id"], 9);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_prize_names_survive_validation(names in prop::collection::vec("[A-Za-z][A-Za-z ]{0,20}", 0..8)) {
        let raw = Value::Array(names.iter().map(|n| json!({ "name": n })).collect());
        let selection = PrizeSelection::from_json(raw.clone()).unwrap();

        prop_assert_eq!(selection.to_json(), raw);
        prop_assert_eq!(selection.names(), names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_non_negative_integer_fees_are_accepted(fee in 0u32..10_000_000) {
        let mut body = valid_body();
        body["totalFee"] = json!(fee);

        let claim = validate(body).unwrap();
        prop_assert_eq!(claim.total_fee.amount(), rust_decimal::Decimal::from(fee));
    }
}
