//! Schema setup and legacy migration
//!
//! [`init_schema`] runs on every start and is strictly additive.
//! [`migrate_legacy_schema`] is only run when an operator asks for it; it
//! upgrades tables created by older releases of the service, which used
//! different column names and looser column types.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument};

use crate::error::DatabaseError;

/// Canonical schema, shared with the test database helpers
pub const CLAIMS_SCHEMA: &str =
    include_str!("../../../migrations/20260101_000001_create_claims.sql");

/// Columns the canonical table declares `NOT NULL`
const REQUIRED_COLUMNS: &[&str] = &[
    "full_name",
    "email",
    "full_address",
    "selected_prizes",
    "total_fee",
    "claim_date",
];

/// Name PostgreSQL gives the canonical table's fee check
const FEE_CHECK: &str = "claims_total_fee_check";

/// Legacy column names and their canonical replacements
const RENAMED_COLUMNS: &[(&str, &str)] = &[
    ("name", "full_name"),
    ("address", "full_address"),
    ("prizes", "selected_prizes"),
    ("fee", "total_fee"),
    ("created_at", "claim_date"),
];

/// Ensures the claims table and its index exist
///
/// Calling this repeatedly is harmless: nothing is dropped or rewritten.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::raw_sql(CLAIMS_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

    info!("Claims schema ready");
    Ok(())
}

/// Steps applied by [`migrate_legacy_schema`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub applied: Vec<String>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    fn record(&mut self, step: impl Into<String>) {
        let step = step.into();
        info!(step = %step, "Applied migration step");
        self.applied.push(step);
    }
}

/// Upgrades a claims table written by an older release
///
/// Renames legacy columns, adds missing optional columns, widens the id
/// and its sequence to bigint, converts the prize and fee columns to their
/// canonical types, and adds the canonical `NOT NULL`, default and
/// `total_fee >= 0` constraints. All steps run in one transaction, so a
/// legacy row that violates a constraint fails the whole upgrade and leaves
/// the table untouched. Running it again on an upgraded table applies
/// nothing. Finishes with [`init_schema`] so a missing table is created as
/// well.
#[instrument(skip(pool))]
pub async fn migrate_legacy_schema(pool: &PgPool) -> Result<MigrationReport, DatabaseError> {
    let mut report = MigrationReport::default();
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

    if table_exists(&mut tx).await? {
        for (legacy, canonical) in RENAMED_COLUMNS {
            let has_legacy = column_type(&mut tx, legacy).await?.is_some();
            let has_canonical = column_type(&mut tx, canonical).await?.is_some();

            if has_legacy && !has_canonical {
                sqlx::query(&format!(
                    "ALTER TABLE claims RENAME COLUMN {legacy} TO {canonical}"
                ))
                .execute(&mut *tx)
                .await
                .map_err(migration_failed)?;
                report.record(format!("renamed column {legacy} to {canonical}"));
            }
        }

        for column in ["phone", "city"] {
            if column_type(&mut tx, column).await?.is_none() {
                sqlx::query(&format!("ALTER TABLE claims ADD COLUMN {column} TEXT"))
                    .execute(&mut *tx)
                    .await
                    .map_err(migration_failed)?;
                report.record(format!("added column {column}"));
            }
        }

        if column_type(&mut tx, "id").await?.as_deref() == Some("integer") {
            sqlx::query("ALTER TABLE claims ALTER COLUMN id TYPE BIGINT")
                .execute(&mut *tx)
                .await
                .map_err(migration_failed)?;
            report.record("widened id to bigint");
        }

        if column_type(&mut tx, "claim_date").await?.as_deref()
            == Some("timestamp without time zone")
        {
            sqlx::query(
                "ALTER TABLE claims ALTER COLUMN claim_date TYPE TIMESTAMPTZ \
                 USING claim_date AT TIME ZONE 'UTC'",
            )
            .execute(&mut *tx)
            .await
            .map_err(migration_failed)?;
            report.record("converted claim_date to timestamptz");
        }

        if let Some(data_type) = column_type(&mut tx, "selected_prizes").await? {
            if data_type != "jsonb" {
                sqlx::query(
                    "ALTER TABLE claims ALTER COLUMN selected_prizes TYPE JSONB \
                     USING selected_prizes::text::jsonb",
                )
                .execute(&mut *tx)
                .await
                .map_err(migration_failed)?;
                report.record(format!("converted selected_prizes from {data_type} to jsonb"));
            }
        }

        if let Some(data_type) = column_type(&mut tx, "total_fee").await? {
            if data_type != "numeric" {
                sqlx::query(
                    "ALTER TABLE claims ALTER COLUMN total_fee TYPE NUMERIC(12, 2) \
                     USING total_fee::numeric",
                )
                .execute(&mut *tx)
                .await
                .map_err(migration_failed)?;
                report.record(format!("converted total_fee from {data_type} to numeric"));
            }
        }

        if let Some((sequence, data_type)) = id_sequence(&mut tx).await? {
            if data_type != "bigint" {
                sqlx::query(&format!("ALTER SEQUENCE {sequence} AS BIGINT"))
                    .execute(&mut *tx)
                    .await
                    .map_err(migration_failed)?;
                report.record(format!("widened {sequence} from {data_type} to bigint"));
            }
        }

        for column in REQUIRED_COLUMNS {
            let nullable = column_info(&mut tx, column)
                .await?
                .is_some_and(|info| info.nullable);
            if nullable {
                sqlx::query(&format!("ALTER TABLE claims ALTER COLUMN {column} SET NOT NULL"))
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        DatabaseError::MigrationFailed(format!(
                            "cannot make {column} NOT NULL: {e}"
                        ))
                    })?;
                report.record(format!("made {column} not null"));
            }
        }

        let has_date_default = column_info(&mut tx, "claim_date")
            .await?
            .is_some_and(|info| info.has_default);
        if !has_date_default {
            sqlx::query("ALTER TABLE claims ALTER COLUMN claim_date SET DEFAULT NOW()")
                .execute(&mut *tx)
                .await
                .map_err(migration_failed)?;
            report.record("defaulted claim_date to now()");
        }

        if !constraint_exists(&mut tx, FEE_CHECK).await? {
            sqlx::query(&format!(
                "ALTER TABLE claims ADD CONSTRAINT {FEE_CHECK} CHECK (total_fee >= 0)"
            ))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DatabaseError::MigrationFailed(format!(
                    "cannot add CHECK (total_fee >= 0): {e}"
                ))
            })?;
            report.record(format!("added constraint {FEE_CHECK}"));
        }
    }

    tx.commit()
        .await
        .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

    init_schema(pool).await?;
    Ok(report)
}

async fn table_exists(tx: &mut Transaction<'_, Postgres>) -> Result<bool, DatabaseError> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema() AND table_name = 'claims'
        )",
    )
    .fetch_one(&mut **tx)
    .await?;

    Ok(exists)
}

struct ColumnInfo {
    data_type: String,
    nullable: bool,
    has_default: bool,
}

async fn column_info(
    tx: &mut Transaction<'_, Postgres>,
    column: &str,
) -> Result<Option<ColumnInfo>, DatabaseError> {
    let row: Option<(String, String, Option<String>)> = sqlx::query_as(
        "SELECT data_type::text, is_nullable::text, column_default::text
         FROM information_schema.columns
         WHERE table_schema = current_schema() AND table_name = 'claims' AND column_name = $1",
    )
    .bind(column)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row.map(|(data_type, is_nullable, default)| ColumnInfo {
        data_type,
        nullable: is_nullable == "YES",
        has_default: default.is_some(),
    }))
}

async fn column_type(
    tx: &mut Transaction<'_, Postgres>,
    column: &str,
) -> Result<Option<String>, DatabaseError> {
    Ok(column_info(tx, column).await?.map(|info| info.data_type))
}

/// Sequence behind `claims.id` and its data type, if the id is serial
async fn id_sequence(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Option<(String, String)>, DatabaseError> {
    let sequence: Option<(String, String)> = sqlx::query_as(
        "SELECT pg_get_serial_sequence('claims', 'id'), format_type(s.seqtypid, NULL)
         FROM pg_sequence s
         WHERE s.seqrelid = pg_get_serial_sequence('claims', 'id')::regclass",
    )
    .fetch_optional(&mut **tx)
    .await?;

    Ok(sequence)
}

async fn constraint_exists(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
) -> Result<bool, DatabaseError> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM pg_constraint
            WHERE conrelid = 'claims'::regclass AND conname = $1
        )",
    )
    .bind(name)
    .fetch_one(&mut **tx)
    .await?;

    Ok(exists)
}

fn migration_failed(err: sqlx::Error) -> DatabaseError {
    DatabaseError::MigrationFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_additive() {
        let upper = CLAIMS_SCHEMA.to_uppercase();
        assert!(upper.contains("CREATE TABLE IF NOT EXISTS CLAIMS"));
        assert!(upper.contains("CREATE INDEX IF NOT EXISTS"));
        assert!(!upper.contains("DROP "));
        assert!(!upper.contains("TRUNCATE"));
    }

    #[test]
    fn test_renames_target_canonical_columns() {
        for (_, canonical) in RENAMED_COLUMNS {
            assert!(CLAIMS_SCHEMA.contains(canonical), "{canonical} missing from schema");
        }
    }

    #[test]
    fn test_upgrade_constraints_match_schema() {
        for column in REQUIRED_COLUMNS {
            let declaration = CLAIMS_SCHEMA
                .lines()
                .find(|line| line.trim_start().starts_with(column))
                .unwrap_or_else(|| panic!("{column} missing from schema"));
            assert!(declaration.contains("NOT NULL"), "{column} is nullable in schema");
        }
        assert!(CLAIMS_SCHEMA.contains("CHECK (total_fee >= 0)"));
    }

    #[test]
    fn test_report_starts_empty() {
        assert!(MigrationReport::default().is_empty());
    }
}
