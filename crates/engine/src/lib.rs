//! Consumption and audit reconciliation for a vehicle wash facility.
//!
//! The crate has two halves:
//!
//! - pure reconciliation passes over record collections: [`classify`],
//!   [`reduce`], [`aggregate`], [`seals_used`] / [`total_seals_used`] and the
//!   report shapers [`wash_report`] / [`seal_report`]. They never fail and
//!   keep no state between calls;
//! - the [`Facility`] ledger, which keeps the catalog, stock levels and logs
//!   in memory and is the record source the passes read from.

pub use category::{Category, classify};
pub use consumption::{ConsumptionTotals, aggregate};
pub use error::EngineError;
pub use facility::{
    Catalog, CatalogRecipeLine, CatalogSupply, CatalogVehicleType, Facility, SealLogNew, WashNew,
    generate_sku,
};
pub use inventory::{InventorySnapshot, reduce};
pub use quantity::Quantity;
pub use records::{SealLogRecord, SupplyRecord, VehicleType, WashRecord, text_or_number};
pub use report::{
    Cell, Column, MISSING_VEHICLE_TYPE, SEAL_COLUMNS, TOTALS_LABEL, TabularReport, TotalsRow,
    WASH_COLUMNS, seal_report, shape, wash_report,
};
pub use seals::{SealCount, assess, parse_seal_number, seals_used, total_seals_used};

mod category;
mod consumption;
mod error;
mod facility;
mod inventory;
mod quantity;
mod records;
mod report;
mod seals;

type ResultEngine<T> = Result<T, EngineError>;
