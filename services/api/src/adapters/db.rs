//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `DatabaseService` port from the `core` crate. It handles all interactions
//! with the three PostgreSQL tables backing the catalog, the user medication list
//! and the drug-food interaction list, using `sqlx`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dfi_checker_core::domain::{CatalogEntry, Medication, NewMedication};
use dfi_checker_core::ports::{DatabaseService, PortError, PortResult};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `DatabaseService` port.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trips a trivial query to confirm the store is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Creates the three tables if they are missing. No indexes are managed here.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct CatalogRecord {
    sfda_drug_id: String,
    trade_name: String,
    scientific_name: String,
}
impl CatalogRecord {
    fn to_domain(self) -> CatalogEntry {
        CatalogEntry {
            sfda_drug_id: self.sfda_drug_id,
            trade_name: self.trade_name,
            scientific_name: self.scientific_name,
        }
    }
}

#[derive(FromRow)]
struct MedicationRecord {
    id: Uuid,
    user_id: String,
    sfda_drug_id: String,
    drug_trade_name: String,
    drug_scientific_name: String,
    drug_duration_start_date: DateTime<Utc>,
    drug_duration_end_date: Option<DateTime<Utc>>,
    processed: i32,
}
impl MedicationRecord {
    fn to_domain(self) -> Medication {
        Medication {
            id: self.id,
            user_id: self.user_id,
            sfda_drug_id: self.sfda_drug_id,
            trade_name: self.drug_trade_name,
            scientific_name: self.drug_scientific_name,
            start_date: self.drug_duration_start_date,
            end_date: self.drug_duration_end_date,
            processed: self.processed,
        }
    }
}

// Missing catalog fields read as empty strings.
const CATALOG_COLUMNS: &str = "COALESCE(sfda_drug_id, '') AS sfda_drug_id, \
     COALESCE(trade_name, '') AS trade_name, \
     COALESCE(scientific_name, '') AS scientific_name";

const MEDICATION_COLUMNS: &str = "id, user_id, sfda_drug_id, drug_trade_name, \
     drug_scientific_name, drug_duration_start_date, drug_duration_end_date, processed";

//=========================================================================================
// `DatabaseService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DatabaseService for DbAdapter {
    async fn search_catalog(&self, query: &str, limit: usize) -> PortResult<Vec<CatalogEntry>> {
        // strpos keeps the query literal, unlike LIKE or a regex.
        let sql = format!(
            "SELECT {CATALOG_COLUMNS} FROM sfda_drugs \
             WHERE strpos(lower(trade_name), lower($1)) > 0 \
                OR strpos(lower(scientific_name), lower($1)) > 0 \
             LIMIT $2"
        );
        let records = sqlx::query_as::<_, CatalogRecord>(&sql)
            .bind(query)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn find_catalog_entry_by_name(&self, name: &str) -> PortResult<CatalogEntry> {
        let sql = format!(
            "SELECT {CATALOG_COLUMNS} FROM sfda_drugs \
             WHERE lower(trade_name) = lower($1) OR lower(scientific_name) = lower($1) \
             LIMIT 1"
        );
        let record = sqlx::query_as::<_, CatalogRecord>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or_else(|| PortError::NotFound(format!("Catalog entry '{}' not found", name)))?;

        Ok(record.to_domain())
    }

    async fn insert_medication(&self, medication: NewMedication) -> PortResult<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO user_medication_list \
             (id, user_id, sfda_drug_id, drug_trade_name, drug_scientific_name, \
              drug_duration_start_date, drug_duration_end_date, processed) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 0) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(&medication.user_id)
        .bind(&medication.sfda_drug_id)
        .bind(&medication.trade_name)
        .bind(&medication.scientific_name)
        .bind(medication.start_date)
        .bind(medication.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(id)
    }

    async fn get_medications_for_user(&self, user_id: &str) -> PortResult<Vec<Medication>> {
        let sql = format!("SELECT {MEDICATION_COLUMNS} FROM user_medication_list WHERE user_id = $1");
        let records = sqlx::query_as::<_, MedicationRecord>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn get_medication_by_id(&self, medication_id: Uuid) -> PortResult<Medication> {
        let sql = format!("SELECT {MEDICATION_COLUMNS} FROM user_medication_list WHERE id = $1");
        let record = sqlx::query_as::<_, MedicationRecord>(&sql)
            .bind(medication_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => {
                    PortError::NotFound(format!("Medication {} not found", medication_id))
                }
                _ => unexpected(e),
            })?;

        Ok(record.to_domain())
    }

    async fn delete_medication(&self, medication_id: Uuid) -> PortResult<u64> {
        let result = sqlx::query("DELETE FROM user_medication_list WHERE id = $1")
            .bind(medication_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(result.rows_affected())
    }

    async fn delete_interactions_for(&self, user_id: &str, trade_name: &str) -> PortResult<u64> {
        let result =
            sqlx::query("DELETE FROM drug_food_interactions WHERE trade_name = $1 AND user_id = $2")
                .bind(trade_name)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(unexpected)?;

        Ok(result.rows_affected())
    }

    async fn count_active_interactions(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> PortResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM drug_food_interactions \
             WHERE user_id = $1 AND (end_date IS NULL OR end_date >= $2)",
        )
        .bind(user_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_column_defaults_to_empty() {
        for column in ["sfda_drug_id", "trade_name", "scientific_name"] {
            let expected = format!("COALESCE({column}, '') AS {column}");
            assert!(
                CATALOG_COLUMNS.contains(&expected),
                "{column} is not coalesced in: {CATALOG_COLUMNS}"
            );
        }
    }
}
