//! Vehicle type catalog endpoint

use axum::{Json, extract::State};
use engine::VehicleType;

use crate::server::ServerState;

/// Handle requests for listing the vehicle types of the catalog
pub async fn list(State(state): State<ServerState>) -> Json<Vec<VehicleType>> {
    let facility = state.facility.read().await;
    Json(facility.vehicle_types().to_vec())
}
