use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{dashboard, reconcile, reports, seal_logs, supplies, vehicle_types, washes};
use engine::Facility;

#[derive(Clone)]
pub struct ServerState {
    pub facility: Arc<RwLock<Facility>>,
}

impl ServerState {
    pub fn new(facility: Facility) -> Self {
        Self {
            facility: Arc::new(RwLock::new(facility)),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/vehicle-types", get(vehicle_types::list))
        .route(
            "/api/washing-services",
            get(washes::list).post(washes::register).delete(washes::clear),
        )
        .route("/api/washing-services/{id}", delete(washes::remove))
        .route(
            "/api/supplies",
            get(supplies::list).delete(supplies::reset),
        )
        .route("/api/supplies/restock", post(supplies::restock))
        .route(
            "/api/seal-logs",
            get(seal_logs::list).post(seal_logs::create).delete(seal_logs::clear),
        )
        .route("/api/seal-logs/audit", get(seal_logs::audit))
        .route("/api/seal-logs/{id}", delete(seal_logs::remove))
        .route("/api/dashboard/inventory", get(dashboard::inventory))
        .route("/api/dashboard/consumption", get(dashboard::consumption))
        .route("/api/reports/washes", get(reports::washes))
        .route("/api/reports/washes/export", get(reports::washes_export))
        .route("/api/reports/seals", get(reports::seals))
        .route("/api/reports/seals/export", get(reports::seals_export))
        .route("/api/reconcile/inventory", post(reconcile::inventory))
        .route("/api/reconcile/consumption", post(reconcile::consumption))
        .route("/api/reconcile/seals", post(reconcile::seals))
        .with_state(state)
}

pub async fn run_with_listener(
    facility: Facility,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(facility))).await
}
