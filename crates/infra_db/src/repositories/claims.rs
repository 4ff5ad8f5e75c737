//! Claims repository implementation
//!
//! This module provides database access for giveaway claims: one INSERT for
//! submissions and SELECTs for the listing and lookup routes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use core_kernel::{ClaimId, ShippingFee};
use domain_claims::{Claim, NewClaim};

use crate::error::DatabaseError;

/// Column list for claims queries.
const CLAIM_COLUMNS: &str = "id, full_name, email, phone, city, full_address, \
    selected_prizes, total_fee, claim_date";

/// Repository for managing claims data
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends a claim and returns the generated identifier
    ///
    /// The claim date defaults to the database clock.
    pub async fn insert(&self, claim: &NewClaim) -> Result<ClaimId, DatabaseError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO claims (
                full_name, email, phone, city, full_address,
                selected_prizes, total_fee
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&claim.full_name)
        .bind(&claim.email)
        .bind(&claim.phone)
        .bind(&claim.city)
        .bind(&claim.full_address)
        .bind(Json(claim.selected_prizes.to_json()))
        .bind(claim.total_fee.amount())
        .fetch_one(&self.pool)
        .await?;

        Ok(ClaimId::new(id))
    }

    /// Lists every claim, newest first
    ///
    /// Ties on `claim_date` fall back to the id so the order is stable.
    pub async fn list(&self) -> Result<Vec<ClaimRow>, DatabaseError> {
        let query = format!(
            "SELECT {CLAIM_COLUMNS} FROM claims ORDER BY claim_date DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ClaimRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Finds a claim by its identifier
    pub async fn find_by_id(&self, id: ClaimId) -> Result<Option<ClaimRow>, DatabaseError> {
        let query = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE id = $1");
        let row = sqlx::query_as::<_, ClaimRow>(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Counts stored claims
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM claims")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Database row for the claims table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub full_address: String,
    pub selected_prizes: Json<Value>,
    pub total_fee: Decimal,
    pub claim_date: DateTime<Utc>,
}

impl TryFrom<ClaimRow> for Claim {
    type Error = DatabaseError;

    fn try_from(row: ClaimRow) -> Result<Self, Self::Error> {
        let total_fee = ShippingFee::new(row.total_fee).map_err(|e| {
            DatabaseError::SerializationError(format!("claim {}: {}", row.id, e))
        })?;

        Ok(Claim {
            id: ClaimId::new(row.id),
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            city: row.city,
            full_address: row.full_address,
            selected_prizes: row.selected_prizes.0,
            total_fee,
            claim_date: row.claim_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn row() -> ClaimRow {
        ClaimRow {
            id: 4,
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            city: None,
            full_address: "1 Main St".to_string(),
            selected_prizes: Json(json!([{ "name": "Mug" }])),
            total_fee: dec!(1500.00),
            claim_date: Utc::now(),
        }
    }

    #[test]
    fn test_row_to_claim() {
        let claim = Claim::try_from(row()).unwrap();
        assert_eq!(claim.id, ClaimId::new(4));
        assert_eq!(claim.total_fee.amount(), dec!(1500));
        assert_eq!(claim.selected_prizes, json!([{ "name": "Mug" }]));
    }

    #[test]
    fn test_negative_stored_fee_is_reported() {
        let mut bad = row();
        bad.total_fee = dec!(-1);
        let err = Claim::try_from(bad).unwrap_err();
        assert!(matches!(err, DatabaseError::SerializationError(_)));
    }
}
