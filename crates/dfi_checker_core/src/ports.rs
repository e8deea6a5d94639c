//! crates/dfi_checker_core/src/ports.rs
//!
//! Defines the service contract for the backing store.
//! The trait forms the boundary of the hexagonal architecture, so the web layer
//! never depends on a concrete database driver.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{CatalogEntry, Medication, NewMedication};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The three collections the service talks to: the catalog, the user
/// medication list and the drug-food interaction list.
#[async_trait]
pub trait DatabaseService: Send + Sync {
    // --- Catalog ---

    /// Case-insensitive substring search over trade and scientific names,
    /// returning at most `limit` rows in store order.
    async fn search_catalog(&self, query: &str, limit: usize) -> PortResult<Vec<CatalogEntry>>;

    /// Case-insensitive exact match on either name. `NotFound` when nothing matches.
    async fn find_catalog_entry_by_name(&self, name: &str) -> PortResult<CatalogEntry>;

    // --- Medication List ---

    async fn insert_medication(&self, medication: NewMedication) -> PortResult<Uuid>;

    async fn get_medications_for_user(&self, user_id: &str) -> PortResult<Vec<Medication>>;

    async fn get_medication_by_id(&self, medication_id: Uuid) -> PortResult<Medication>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete_medication(&self, medication_id: Uuid) -> PortResult<u64>;

    // --- Drug-Food Interactions ---

    /// Removes every interaction for the user and trade name, returning how many went.
    async fn delete_interactions_for(&self, user_id: &str, trade_name: &str) -> PortResult<u64>;

    /// Counts interactions whose end date is null or not before `now`.
    async fn count_active_interactions(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> PortResult<i64>;
}
