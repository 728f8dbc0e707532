//! Report endpoints: tabular JSON and CSV downloads

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use engine::TabularReport;

use crate::{ServerError, export, server::ServerState};

const WASH_REPORT_FILE: &str = "Report.csv";
const SEAL_REPORT_FILE: &str = "Seal_Report.csv";

fn attachment(report: &TabularReport, file_name: &str) -> Result<Response, ServerError> {
    let data = export::to_csv(report)
        .map_err(|err| ServerError::Internal(format!("failed to export {file_name}: {err}")))?;
    let disposition = format!("attachment; filename=\"{file_name}\"");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        data,
    )
        .into_response())
}

pub async fn washes(State(state): State<ServerState>) -> Json<TabularReport> {
    let facility = state.facility.read().await;
    Json(engine::wash_report(facility.washes()))
}

/// Handle requests for the wash report as a CSV file
pub async fn washes_export(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let report = {
        let facility = state.facility.read().await;
        engine::wash_report(facility.washes())
    };
    tracing::info!("exporting wash report ({} records)", report.record_rows().len());
    attachment(&report, WASH_REPORT_FILE)
}

pub async fn seals(State(state): State<ServerState>) -> Json<TabularReport> {
    let facility = state.facility.read().await;
    Json(engine::seal_report(facility.seal_logs()))
}

/// Handle requests for the seal report as a CSV file
pub async fn seals_export(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let report = {
        let facility = state.facility.read().await;
        engine::seal_report(facility.seal_logs())
    };
    tracing::info!("exporting seal report ({} records)", report.record_rows().len());
    attachment(&report, SEAL_REPORT_FILE)
}
