//! Stateless reconciliation endpoints.
//!
//! The caller supplies the record collection in the request body, whatever
//! its content type. A body that is missing, not JSON or not a JSON array
//! counts as an empty collection and elements that do not match the record
//! shape are skipped.

use api_types::seal::SealAudit;
use axum::{Json, body::Bytes};
use engine::{ConsumptionTotals, InventorySnapshot, SealLogRecord, SupplyRecord, WashRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::seal_logs::audit_logs;

fn lenient_collection<T: DeserializeOwned>(kind: &str, body: &[u8]) -> Vec<T> {
    let items = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!("{kind} payload is not an array, reconciling an empty collection");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(
                "{kind} payload is not readable JSON ({err}), reconciling an empty collection"
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!("skipping {kind} record #{index}: {err}");
                None
            }
        })
        .collect()
}

pub async fn inventory(body: Bytes) -> Json<InventorySnapshot> {
    let records: Vec<SupplyRecord> = lenient_collection("supply", &body);
    Json(engine::reduce(&records))
}

pub async fn consumption(body: Bytes) -> Json<ConsumptionTotals> {
    let records: Vec<WashRecord> = lenient_collection("wash", &body);
    Json(engine::aggregate(&records))
}

pub async fn seals(body: Bytes) -> Json<SealAudit> {
    let logs: Vec<SealLogRecord> = lenient_collection("seal log", &body);
    Json(audit_logs(&logs))
}
