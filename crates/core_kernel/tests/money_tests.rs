//! Unit tests for shipping fees

use core_kernel::{Currency, MoneyError, ShippingFee};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_amount() {
        let fee = ShippingFee::new(dec!(1500)).unwrap();
        assert_eq!(fee.amount(), dec!(1500));
    }

    #[test]
    fn test_zero_is_valid() {
        let fee = ShippingFee::new(Decimal::ZERO).unwrap();
        assert!(fee.is_zero());
        assert_eq!(fee, ShippingFee::zero());
    }

    #[test]
    fn test_negative_is_rejected() {
        let err = ShippingFee::new(dec!(-1)).unwrap_err();
        assert!(matches!(err, MoneyError::InvalidAmount(_)));
    }

    #[test]
    fn test_amount_beyond_store_bound_is_rejected() {
        let err = ShippingFee::new(dec!(10000000000)).unwrap_err();
        assert!(matches!(err, MoneyError::OutOfRange(_)));
        assert!(ShippingFee::new(dec!(9999999999.99)).is_ok());
    }

    #[test]
    fn test_from_units() {
        assert_eq!(ShippingFee::from_units(2500).amount(), dec!(2500));
    }

    #[test]
    fn test_currency_is_naira() {
        assert_eq!(ShippingFee::currency(), Currency::NGN);
        assert_eq!(Currency::NGN.code(), "NGN");
    }
}

mod serde_behaviour {
    use super::*;

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<ShippingFee, _> = serde_json::from_str("\"-10\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let result: Result<ShippingFee, _> = serde_json::from_str("\"10000000000\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_accepts_string_amount() {
        let fee: ShippingFee = serde_json::from_str("\"1500.00\"").unwrap();
        assert_eq!(fee.amount(), dec!(1500));
    }
}
