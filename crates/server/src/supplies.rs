//! Supply inventory API endpoints

use api_types::supply::Restock;
use axum::{Json, extract::State, http::StatusCode};
use engine::{EngineError, Quantity, SupplyRecord};

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Json<Vec<SupplyRecord>> {
    let facility = state.facility.read().await;
    Json(facility.supplies().to_vec())
}

/// Handle requests for adding stock to a supply
pub async fn restock(
    State(state): State<ServerState>,
    Json(payload): Json<Restock>,
) -> Result<Json<SupplyRecord>, ServerError> {
    let Some(name) = payload.name else {
        return Err(EngineError::InvalidName("supply name is mandatory".to_string()).into());
    };
    let Some(amount) = payload.current_quantity else {
        return Err(ServerError::Generic("currentQuantity required".to_string()));
    };
    let quantity = Quantity::from_f64(amount)
        .ok_or_else(|| EngineError::InvalidQuantity(format!("unsupported amount: {amount}")))?;

    let mut facility = state.facility.write().await;
    let supply = facility.restock(&name, quantity)?.clone();
    tracing::info!("restocked {name} by {quantity} L");
    Ok(Json(supply))
}

/// Handle requests for emptying every tank
pub async fn reset(State(state): State<ServerState>) -> StatusCode {
    let mut facility = state.facility.write().await;
    facility.reset_inventory();
    tracing::warn!("inventory reset to zero");
    StatusCode::NO_CONTENT
}
