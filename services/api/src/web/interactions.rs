//! services/api/src/web/interactions.rs
//!
//! Drug-food interaction status for a user.

use crate::error::ApiError;
use crate::web::protocol::InteractionStatusResponse;
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use mockable::Clock;
use std::sync::Arc;

/// Report whether the user has any active drug-food interaction.
///
/// An interaction is active while its end date is unset or not yet in the past.
#[utoipa::path(
    get,
    path = "/user/{user_id}/has-interactions",
    params(
        ("user_id" = String, Path, description = "The user whose interactions are checked.")
    ),
    responses(
        (status = 200, description = "Whether at least one active interaction exists", body = InteractionStatusResponse),
    )
)]
pub async fn has_interactions_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<InteractionStatusResponse>, ApiError> {
    let active = app_state
        .db
        .count_active_interactions(&user_id, app_state.clock.utc())
        .await?;

    Ok(Json(InteractionStatusResponse {
        has_interactions: active > 0,
    }))
}
