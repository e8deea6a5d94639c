//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged with the client. Field names follow the
//! wire contract the mobile client already speaks, so several of them differ
//! from the domain names in `dfi_checker_core`.

use chrono::{DateTime, Utc};
use dfi_checker_core::domain::{AutocompleteMatch, CatalogEntry, Medication, DEFAULT_USER_ID};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

//=========================================================================================
// Catalog Search
//=========================================================================================

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AutocompleteQuery {
    /// Substring to look for in trade and scientific names.
    pub q: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AutofillQuery {
    /// Exact trade or scientific name, compared case-insensitively.
    pub input_name: String,
}

/// One autocomplete hit; `type` names the field that matched.
#[derive(Serialize, Debug, ToSchema)]
pub struct AutocompleteResult {
    #[serde(rename = "type")]
    #[schema(example = "trade_name")]
    pub kind: String,
    pub trade_name: String,
    pub scientific_name: String,
    pub sfda_drug_id: String,
}

impl From<AutocompleteMatch> for AutocompleteResult {
    fn from(m: AutocompleteMatch) -> Self {
        Self {
            kind: m.field.as_str().to_string(),
            trade_name: m.entry.trade_name,
            scientific_name: m.entry.scientific_name,
            sfda_drug_id: m.entry.sfda_drug_id,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct AutocompleteResponse {
    pub results: Vec<AutocompleteResult>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CatalogEntryResponse {
    pub sfda_drug_id: String,
    pub trade_name: String,
    pub scientific_name: String,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            sfda_drug_id: entry.sfda_drug_id,
            trade_name: entry.trade_name,
            scientific_name: entry.scientific_name,
        }
    }
}

//=========================================================================================
// Medication List
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddMedicationRequest {
    #[serde(alias = "drug_id")]
    pub sfda_drug_id: String,
    pub trade_name: String,
    pub scientific_name: String,
    /// `"DD/MM/YYYY - DD/MM/YYYY"`, `"DD/MM/YYYY - Ongoing"`, `"DD/MM/YYYY"` or empty.
    #[schema(example = "01/01/2024 - Ongoing")]
    pub duration: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Sent by the client; not stored.
    #[serde(default)]
    pub integrated: bool,
}

#[derive(Serialize, ToSchema)]
pub struct AddMedicationResponse {
    pub message: String,
    pub inserted_id: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetMedicationsQuery {
    /// Defaults to `"1"`.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

/// A stored medication record, keyed the way the collection stores it.
#[derive(Serialize, Debug, ToSchema)]
pub struct MedicationResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub sfda_drug_id: String,
    pub drug_trade_name: String,
    pub drug_scientific_name: String,
    pub drug_duration_start_date: DateTime<Utc>,
    pub drug_duration_end_date: Option<DateTime<Utc>>,
    pub processed: i32,
}

impl From<Medication> for MedicationResponse {
    fn from(m: Medication) -> Self {
        Self {
            id: m.id.to_string(),
            user_id: m.user_id,
            sfda_drug_id: m.sfda_drug_id,
            drug_trade_name: m.trade_name,
            drug_scientific_name: m.scientific_name,
            drug_duration_start_date: m.start_date,
            drug_duration_end_date: m.end_date,
            processed: m.processed,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MedicationListResponse {
    pub count: usize,
    pub medications: Vec<MedicationResponse>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DeleteMedicationRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

//=========================================================================================
// Interactions
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct InteractionStatusResponse {
    #[serde(rename = "hasInteractions")]
    pub has_interactions: bool,
}
