//! crates/dfi_checker_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or serialization format.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The user id assumed when a request does not carry one.
pub const DEFAULT_USER_ID: &str = "1";

/// A row of the SFDA drug catalog. Read-only from this service's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub sfda_drug_id: String,
    pub trade_name: String,
    pub scientific_name: String,
}

/// Which catalog field an autocomplete query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    TradeName,
    ScientificName,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::TradeName => "trade_name",
            MatchField::ScientificName => "scientific_name",
        }
    }
}

/// A single autocomplete hit. One catalog row can produce two of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteMatch {
    pub field: MatchField,
    pub entry: CatalogEntry,
}

/// A medication a user reports taking over a date range.
#[derive(Debug, Clone)]
pub struct Medication {
    pub id: Uuid,
    pub user_id: String,
    pub sfda_drug_id: String,
    pub trade_name: String,
    pub scientific_name: String,
    pub start_date: DateTime<Utc>,
    /// `None` means the course is ongoing.
    pub end_date: Option<DateTime<Utc>>,
    pub processed: i32,
}

// Insert payload; the store assigns the id and the processed flag.
#[derive(Debug, Clone)]
pub struct NewMedication {
    pub user_id: String,
    pub sfda_drug_id: String,
    pub trade_name: String,
    pub scientific_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}
