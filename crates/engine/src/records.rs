//! Raw records handed to the reconciliation passes.
//!
//! Wire names follow the dashboard API (`camelCase`). Every field a record
//! source may omit is optional here; the passes decide how a missing value
//! contributes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use crate::{Quantity, quantity::nullable_or_zero};

/// A stock entry as reported by the inventory source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    /// Litres currently in stock.
    #[serde(default, deserialize_with = "nullable_or_zero")]
    pub current_quantity: Quantity,
}

impl SupplyRecord {
    pub fn new(name: &str, current_quantity: Quantity) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            sku: None,
            current_quantity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// One wash service with the resources it consumed.
///
/// Water is in litres, chemicals in millilitres. `id` and `date` identify the
/// record but take no part in any total, so a record missing them still
/// counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WashRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default)]
    pub washing_minutes: Option<u32>,
    #[serde(default)]
    pub water_used: Option<Quantity>,
    #[serde(default)]
    pub disinfectant_used: Option<Quantity>,
    #[serde(default)]
    pub degreaser_used: Option<Quantity>,
    #[serde(default)]
    pub bleach_used: Option<Quantity>,
}

impl WashRecord {
    /// Vehicle type name, if the relation and its name are present.
    pub fn vehicle_type_name(&self) -> Option<&str> {
        self.vehicle_type
            .as_ref()
            .and_then(|vehicle_type| vehicle_type.name.as_deref())
    }
}

/// Seal usage entry for one outbound truck.
///
/// `initial_strap` and `final_strap` are the first and last seal numbers
/// handed out. They are kept as text because operators type them freely; a
/// JSON number is accepted and stored in its decimal form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealLogRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub washer_name: String,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub initial_strap: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub final_strap: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateField {
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Reads a calendar date, keeping only the day of a date-time.
///
/// Anything that is not a `YYYY-MM-DD` string (optionally followed by a
/// `T` or space and a time) becomes `None` instead of failing the record.
fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let Some(DateField::Text(text)) = Option::<DateField>::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(text
        .trim()
        .split(['T', ' '])
        .next()
        .and_then(|day| day.parse().ok()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accepts a string, a number or `null` for a free-text identifier.
pub fn text_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Integer(number) => number.to_string(),
            TextOrNumber::Float(number) => number.to_string(),
        }),
    )
}
