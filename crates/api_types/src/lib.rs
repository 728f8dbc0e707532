use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod wash {
    use super::*;

    /// Reference to a catalog vehicle type, as sent by the dashboard form.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct VehicleTypeRef {
        pub id: Option<u64>,
    }

    /// Request body for registering a wash.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WashNew {
        pub vehicle_type: Option<VehicleTypeRef>,
        pub washing_minutes: Option<u32>,
        pub date: NaiveDate,
    }
}

pub mod supply {
    use super::*;

    /// Request body for a restock. `currentQuantity` is the amount to add,
    /// in litres.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Restock {
        pub name: Option<String>,
        pub current_quantity: Option<f64>,
    }
}

pub mod seal {
    use super::*;

    /// Request body for a new seal log entry.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SealLogNew {
        pub date: NaiveDate,
        pub driver_name: Option<String>,
        #[serde(default)]
        pub washer_name: String,
        #[serde(default)]
        pub vehicle_type: String,
        #[serde(default)]
        pub license_plate: String,
        #[serde(default, deserialize_with = "engine::text_or_number")]
        pub initial_strap: Option<String>,
        #[serde(default, deserialize_with = "engine::text_or_number")]
        pub final_strap: Option<String>,
    }

    /// Seal count of one log entry.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SealAuditRow {
        pub id: Option<u64>,
        pub seals_used: Option<u64>,
    }

    /// Per-entry seal counts plus the grand total.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SealAudit {
        pub rows: Vec<SealAuditRow>,
        pub total_seals_used: u64,
        /// Entries whose range is unparseable or reversed.
        pub invalid_ranges: usize,
    }
}

pub mod cleared {
    use super::*;

    /// Response body for bulk deletions.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Cleared {
        pub removed: usize,
    }
}
