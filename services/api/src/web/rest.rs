//! services/api/src/web/rest.rs
//!
//! Wires the REST handlers into a router and holds the master definition for
//! the OpenAPI specification.

use crate::error::ErrorResponse;
use crate::web::catalog::{self, autocomplete_handler, autofill_handler};
use crate::web::interactions::{self, has_interactions_handler};
use crate::web::medications::{
    self, add_medication_handler, delete_medication_handler, get_medications_handler,
};
use crate::web::protocol::{
    AddMedicationRequest, AddMedicationResponse, AutocompleteResponse, AutocompleteResult,
    CatalogEntryResponse, DeleteMedicationRequest, InteractionStatusResponse,
    MedicationListResponse, MedicationResponse, MessageResponse,
};
use crate::web::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::autocomplete_handler,
        catalog::autofill_handler,
        medications::add_medication_handler,
        medications::get_medications_handler,
        medications::delete_medication_handler,
        interactions::has_interactions_handler,
    ),
    components(
        schemas(
            AutocompleteResult,
            AutocompleteResponse,
            CatalogEntryResponse,
            AddMedicationRequest,
            AddMedicationResponse,
            MedicationResponse,
            MedicationListResponse,
            DeleteMedicationRequest,
            MessageResponse,
            InteractionStatusResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "DFI Checker API", description = "Drug catalog search, medication list and drug-food interaction status.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Router
//=========================================================================================

/// Builds the router for every REST endpoint, bound to the shared state.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/autocomplete", get(autocomplete_handler))
        .route("/autofill", get(autofill_handler))
        .route("/add_medication", post(add_medication_handler))
        .route("/get_medications", get(get_medications_handler))
        .route("/delete_medication", delete(delete_medication_handler))
        .route("/user/{user_id}/has-interactions", get(has_interactions_handler))
        .with_state(app_state)
}
