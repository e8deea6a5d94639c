//! services/api/src/web/medications.rs
//!
//! Handlers for a user's medication list: add, list and delete. Deleting a
//! medication also clears the drug-food interactions recorded for it.

use crate::error::ApiError;
use crate::web::protocol::{
    AddMedicationRequest, AddMedicationResponse, DeleteMedicationRequest, GetMedicationsQuery,
    MedicationListResponse, MedicationResponse, MessageResponse,
};
use crate::web::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use dfi_checker_core::{parse_duration, NewMedication, PortError};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

const MEDICATION_ADDED: &str = "Medication added successfully.";
const MEDICATION_DELETED: &str = "Medication and related interactions deleted successfully.";
const NO_MATCHING_MEDICATION: &str = "No matching medication found.";
const ID_REQUIRED: &str = "Medication _id is required for deletion.";

/// Record that a user is taking a drug over the given duration.
#[utoipa::path(
    post,
    path = "/add_medication",
    request_body = AddMedicationRequest,
    responses(
        (status = 200, description = "The new record id, or an error object for a malformed body or bad duration", body = AddMedicationResponse),
    )
)]
pub async fn add_medication_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<AddMedicationRequest>, JsonRejection>,
) -> Result<Json<AddMedicationResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    debug!("Add medication payload: {:?}", req);

    let range = parse_duration(&req.duration, app_state.clock.utc())?;
    let medication = NewMedication {
        user_id: req.user_id,
        sfda_drug_id: req.sfda_drug_id,
        trade_name: req.trade_name,
        scientific_name: req.scientific_name,
        start_date: range.start,
        end_date: range.end,
    };

    let inserted_id = app_state.db.insert_medication(medication).await?;
    info!(%inserted_id, integrated = req.integrated, "Medication inserted");

    Ok(Json(AddMedicationResponse {
        message: MEDICATION_ADDED.to_string(),
        inserted_id: inserted_id.to_string(),
    }))
}

/// List every medication recorded for a user, in store order.
#[utoipa::path(
    get,
    path = "/get_medications",
    params(GetMedicationsQuery),
    responses(
        (status = 200, description = "The user's medication records", body = MedicationListResponse),
    )
)]
pub async fn get_medications_handler(
    State(app_state): State<Arc<AppState>>,
    params: Result<Query<GetMedicationsQuery>, QueryRejection>,
) -> Result<Json<MedicationListResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let medications: Vec<MedicationResponse> = app_state
        .db
        .get_medications_for_user(&params.user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(MedicationListResponse {
        count: medications.len(),
        medications,
    }))
}

/// Delete a medication record and every interaction sharing its trade name and user.
///
/// The two deletes are not wrapped in a transaction.
#[utoipa::path(
    delete,
    path = "/delete_medication",
    request_body = DeleteMedicationRequest,
    responses(
        (status = 200, description = "Confirmation, or an error object when the id is missing, malformed or unknown", body = MessageResponse),
    )
)]
pub async fn delete_medication_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<DeleteMedicationRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let raw_id = req
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation(ID_REQUIRED.to_string()))?;
    let medication_id = Uuid::parse_str(&raw_id).map_err(|_| {
        ApiError::Validation(format!("'{}' is not a valid medication _id.", raw_id))
    })?;

    let db = &app_state.db;
    let medication = match db.get_medication_by_id(medication_id).await {
        Ok(medication) => medication,
        Err(PortError::NotFound(_)) => {
            return Err(ApiError::NotFound(NO_MATCHING_MEDICATION.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    if db.delete_medication(medication_id).await? == 1 {
        let removed = db
            .delete_interactions_for(&medication.user_id, &medication.trade_name)
            .await?;
        debug!(
            "Deleted medication {} and {} related interactions",
            medication_id, removed
        );
        return Ok(Json(MessageResponse {
            message: MEDICATION_DELETED.to_string(),
        }));
    }

    debug!("No medication matched _id {}", medication_id);
    Ok(Json(MessageResponse {
        message: NO_MATCHING_MEDICATION.to_string(),
    }))
}
