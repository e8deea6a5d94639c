//! services/api/src/web/catalog.rs
//!
//! Read-only search over the SFDA drug catalog.

use crate::error::ApiError;
use crate::web::protocol::{
    AutocompleteQuery, AutocompleteResponse, AutofillQuery, CatalogEntryResponse,
};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use dfi_checker_core::{expand_matches, PortError, AUTOCOMPLETE_CANDIDATE_LIMIT};
use std::sync::Arc;
use tracing::debug;

const NAME_NOT_FOUND: &str = "Name not found in SFDA dataset.";

/// Suggest catalog drugs whose trade or scientific name contains `q`.
///
/// At most 15 catalog rows are scanned. A row matching on both names is
/// returned twice, once per matching field.
#[utoipa::path(
    get,
    path = "/autocomplete",
    params(AutocompleteQuery),
    responses(
        (status = 200, description = "Matches in catalog order, or an error object", body = AutocompleteResponse),
    )
)]
pub async fn autocomplete_handler(
    State(app_state): State<Arc<AppState>>,
    params: Result<Query<AutocompleteQuery>, QueryRejection>,
) -> Result<Json<AutocompleteResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    debug!("Autocomplete query received: {}", params.q);

    let candidates = app_state
        .db
        .search_catalog(&params.q, AUTOCOMPLETE_CANDIDATE_LIMIT)
        .await?;
    debug!("Found {} candidate rows", candidates.len());

    let results = expand_matches(&params.q, candidates)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(AutocompleteResponse { results }))
}

/// Resolve an exact (case-insensitive) trade or scientific name to a catalog row.
#[utoipa::path(
    get,
    path = "/autofill",
    params(AutofillQuery),
    responses(
        (status = 200, description = "The first matching catalog row, or an error object when none matched", body = CatalogEntryResponse),
    )
)]
pub async fn autofill_handler(
    State(app_state): State<Arc<AppState>>,
    params: Result<Query<AutofillQuery>, QueryRejection>,
) -> Result<Json<CatalogEntryResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    debug!("Autofill query: {}", params.input_name);

    match app_state.db.find_catalog_entry_by_name(&params.input_name).await {
        Ok(entry) => Ok(Json(entry.into())),
        Err(PortError::NotFound(_)) => Err(ApiError::NotFound(NAME_NOT_FOUND.to_string())),
        Err(e) => Err(e.into()),
    }
}
