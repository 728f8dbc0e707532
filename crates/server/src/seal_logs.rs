//! Seal log API endpoints

use api_types::{
    cleared::Cleared,
    seal::{SealAudit, SealAuditRow, SealLogNew},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{EngineError, SealCount, SealLogRecord};

use crate::{ServerError, server::ServerState};

/// Counts seals per entry and in total.
///
/// Reversed and unparseable ranges count as zero; each one is logged so the
/// data-quality problem stays visible.
pub(crate) fn audit_logs(logs: &[SealLogRecord]) -> SealAudit {
    let mut invalid_ranges = 0;
    let rows = logs
        .iter()
        .map(|log| {
            let count = engine::assess(log);
            match count {
                SealCount::Counted(_) => {}
                SealCount::Unparseable => {
                    invalid_ranges += 1;
                    tracing::warn!(
                        id = ?log.id,
                        "seal log with unparseable range {:?}..{:?}",
                        log.initial_strap,
                        log.final_strap
                    );
                }
                SealCount::Inverted => {
                    invalid_ranges += 1;
                    tracing::warn!(
                        id = ?log.id,
                        "seal log with reversed range {:?}..{:?}",
                        log.initial_strap,
                        log.final_strap
                    );
                }
            }
            SealAuditRow {
                id: log.id,
                seals_used: count.used(),
            }
        })
        .collect();

    SealAudit {
        rows,
        total_seals_used: engine::total_seals_used(logs),
        invalid_ranges,
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<SealLogRecord>> {
    let facility = state.facility.read().await;
    Json(facility.seal_logs().to_vec())
}

/// Handle requests for adding a seal log entry
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SealLogNew>,
) -> Result<(StatusCode, Json<SealLogRecord>), ServerError> {
    let Some(driver_name) = payload.driver_name else {
        return Err(EngineError::InvalidName("driver name is mandatory".to_string()).into());
    };

    let mut facility = state.facility.write().await;
    let log = facility
        .add_seal_log(engine::SealLogNew {
            date: payload.date,
            driver_name,
            washer_name: payload.washer_name,
            vehicle_type: payload.vehicle_type,
            license_plate: payload.license_plate,
            initial_strap: payload.initial_strap,
            final_strap: payload.final_strap,
        })?
        .clone();

    tracing::info!(id = ?log.id, "added seal log for {}", log.license_plate);
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ServerError> {
    let mut facility = state.facility.write().await;
    facility.delete_seal_log(id)?;
    tracing::info!("deleted seal log {id}");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear(State(state): State<ServerState>) -> Json<Cleared> {
    let mut facility = state.facility.write().await;
    let removed = facility.clear_seal_logs();
    tracing::warn!("cleared seal log ({removed} records)");
    Json(Cleared { removed })
}

/// Handle requests for the seal audit of the stored log
pub async fn audit(State(state): State<ServerState>) -> Json<SealAudit> {
    let facility = state.facility.read().await;
    Json(audit_logs(facility.seal_logs()))
}
