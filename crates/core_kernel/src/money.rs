//! Shipping fee types with precise decimal arithmetic
//!
//! Fees are held as `rust_decimal::Decimal` so that amounts computed by the
//! client survive the round trip through the store without float drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    NGN,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::NGN => 2,
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

/// Shipping fee recorded against a claim
///
/// Always non-negative, rounded to the currency's minor unit, and no larger
/// than [`ShippingFee::MAX`], the bound of the store's `NUMERIC(12, 2)` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ShippingFee {
    amount: Decimal,
}

impl ShippingFee {
    /// Largest fee the store can hold
    pub const MAX: Decimal = dec!(9999999999.99);

    /// Creates a fee, rejecting negative amounts and amounts above [`Self::MAX`]
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::InvalidAmount(format!(
                "fee cannot be negative: {}",
                amount
            )));
        }
        let amount = amount.round_dp(Self::currency().decimal_places());
        if amount > Self::MAX {
            return Err(MoneyError::OutOfRange(format!(
                "fee {} exceeds {}",
                amount,
                Self::MAX
            )));
        }
        Ok(Self { amount })
    }

    /// Creates a fee from whole currency units (e.g. naira)
    pub fn from_units(units: u32) -> Self {
        Self {
            amount: Decimal::from(units),
        }
    }

    /// Creates a fee of zero
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency every fee is charged in
    pub fn currency() -> Currency {
        Currency::NGN
    }

    /// Returns true if the fee is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Default for ShippingFee {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Decimal> for ShippingFee {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<ShippingFee> for Decimal {
    fn from(fee: ShippingFee) -> Decimal {
        fee.amount
    }
}

impl fmt::Display for ShippingFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = Self::currency();
        write!(
            f,
            "{} {:.dp$}",
            currency.code(),
            self.amount,
            dp = currency.decimal_places() as usize
        )
    }
}
