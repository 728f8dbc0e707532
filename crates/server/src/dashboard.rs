//! Dashboard figures computed from the stored ledger

use axum::{Json, extract::State};
use engine::{ConsumptionTotals, InventorySnapshot};

use crate::server::ServerState;

/// Handle requests for the current stock per category
pub async fn inventory(State(state): State<ServerState>) -> Json<InventorySnapshot> {
    let facility = state.facility.read().await;
    Json(engine::reduce(facility.supplies()))
}

/// Handle requests for the resources consumed by the logged washes
pub async fn consumption(State(state): State<ServerState>) -> Json<ConsumptionTotals> {
    let facility = state.facility.read().await;
    Json(engine::aggregate(facility.washes()))
}
