//! Wash service API endpoints

use api_types::{cleared::Cleared, wash::WashNew};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::WashRecord;

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Json<Vec<WashRecord>> {
    let facility = state.facility.read().await;
    Json(facility.washes().to_vec())
}

/// Handle requests for registering a wash. Stock is deducted from the
/// vehicle type recipe.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<WashNew>,
) -> Result<(StatusCode, Json<WashRecord>), ServerError> {
    let mut facility = state.facility.write().await;
    let wash = facility
        .register_wash(engine::WashNew {
            vehicle_type_id: payload.vehicle_type.and_then(|vehicle_type| vehicle_type.id),
            washing_minutes: payload.washing_minutes,
            date: payload.date,
        })?
        .clone();

    tracing::info!(
        id = ?wash.id,
        "registered wash ({})",
        wash.vehicle_type_name().unwrap_or(engine::MISSING_VEHICLE_TYPE)
    );
    Ok((StatusCode::CREATED, Json(wash)))
}

/// Handle requests for deleting one wash, returning its recipe to stock.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ServerError> {
    let mut facility = state.facility.write().await;
    facility.delete_wash(id)?;
    tracing::info!("deleted wash {id}");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear(State(state): State<ServerState>) -> Json<Cleared> {
    let mut facility = state.facility.write().await;
    let removed = facility.clear_washes();
    tracing::warn!("cleared wash log ({removed} records)");
    Json(Cleared { removed })
}
