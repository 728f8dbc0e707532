//! The module contains the in-memory facility ledger.
//!
//! A [`Facility`] holds the catalog (vehicle types with their wash recipes
//! and the supplies they draw from), the wash log and the seal log. It keeps
//! stock levels in step with registered washes: registering a wash deducts
//! the recipe from stock, deleting it puts the recipe back.
//!
//! Reconciliation passes read the ledger through [`Facility::supplies`],
//! [`Facility::washes`] and [`Facility::seal_logs`]; they never touch it.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    ConsumptionTotals, EngineError, Quantity, ResultEngine, SealLogRecord, SupplyRecord,
    VehicleType, WashRecord, classify,
};

/// Water drawn per washing minute, in litres.
const WATER_LITRES_PER_MINUTE: i64 = 10;
const SKU_PREFIX_LEN: usize = 10;
const SKU_SUFFIX: &str = "-001";

/// Supply declared in the catalog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogSupply {
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// Opening stock in litres.
    #[serde(default)]
    pub quantity: Quantity,
}

/// One recipe line: millilitres of a supply used per wash.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogRecipeLine {
    pub supply: String,
    pub ml: Quantity,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogVehicleType {
    pub name: String,
    #[serde(default)]
    pub recipe: Vec<CatalogRecipeLine>,
}

/// Seed data for a [`Facility`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub supplies: Vec<CatalogSupply>,
    #[serde(default)]
    pub vehicle_types: Vec<CatalogVehicleType>,
}

#[derive(Clone, Debug, PartialEq)]
struct RecipeLine {
    supply_id: u64,
    ml: Quantity,
}

/// Input for [`Facility::register_wash`].
#[derive(Clone, Debug, PartialEq)]
pub struct WashNew {
    pub vehicle_type_id: Option<u64>,
    pub washing_minutes: Option<u32>,
    pub date: NaiveDate,
}

/// Input for [`Facility::add_seal_log`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SealLogNew {
    pub date: NaiveDate,
    pub driver_name: String,
    pub washer_name: String,
    pub vehicle_type: String,
    pub license_plate: String,
    pub initial_strap: Option<String>,
    pub final_strap: Option<String>,
}

#[derive(Debug, Default)]
pub struct Facility {
    supplies: Vec<SupplyRecord>,
    vehicle_types: Vec<VehicleType>,
    recipes: HashMap<u64, Vec<RecipeLine>>,
    washes: Vec<WashRecord>,
    seal_logs: Vec<SealLogRecord>,
    next_supply_id: u64,
    next_wash_id: u64,
    next_seal_log_id: u64,
}

fn same_name(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

/// Builds the SKU given to a supply first seen through a restock.
///
/// The name is upper-cased and trimmed, spaces become `_`, and the result is
/// cut to ten characters before the `-001` suffix.
pub fn generate_sku(name: &str) -> String {
    let prefix: String = name
        .to_uppercase()
        .trim()
        .replace(' ', "_")
        .chars()
        .take(SKU_PREFIX_LEN)
        .collect();
    format!("{prefix}{SKU_SUFFIX}")
}

impl Facility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a facility from its catalog.
    ///
    /// Supply and vehicle type names must be unique ignoring case, and every
    /// recipe line must name a declared supply.
    pub fn from_catalog(catalog: Catalog) -> ResultEngine<Self> {
        let mut facility = Self::new();

        for supply in catalog.supplies {
            if facility.find_supply(&supply.name).is_some() {
                return Err(EngineError::ExistingKey(supply.name));
            }
            let id = next_id(&mut facility.next_supply_id);
            facility.supplies.push(SupplyRecord {
                id: Some(id),
                sku: Some(supply.sku.unwrap_or_else(|| generate_sku(&supply.name))),
                name: Some(supply.name),
                current_quantity: supply.quantity,
            });
        }

        for vehicle_type in catalog.vehicle_types {
            if facility.vehicle_types.iter().any(|existing| {
                existing
                    .name
                    .as_deref()
                    .is_some_and(|name| same_name(name, &vehicle_type.name))
            }) {
                return Err(EngineError::ExistingKey(vehicle_type.name));
            }

            let mut recipe = Vec::with_capacity(vehicle_type.recipe.len());
            for line in vehicle_type.recipe {
                let supply_id = facility
                    .find_supply(&line.supply)
                    .and_then(|supply| supply.id)
                    .ok_or_else(|| EngineError::KeyNotFound(line.supply.clone()))?;
                recipe.push(RecipeLine {
                    supply_id,
                    ml: line.ml,
                });
            }

            let id = facility.vehicle_types.len() as u64 + 1;
            facility.vehicle_types.push(VehicleType {
                id,
                name: Some(vehicle_type.name),
            });
            facility.recipes.insert(id, recipe);
        }

        Ok(facility)
    }

    pub fn vehicle_types(&self) -> &[VehicleType] {
        &self.vehicle_types
    }

    pub fn supplies(&self) -> &[SupplyRecord] {
        &self.supplies
    }

    pub fn washes(&self) -> &[WashRecord] {
        &self.washes
    }

    pub fn seal_logs(&self) -> &[SealLogRecord] {
        &self.seal_logs
    }

    fn find_supply(&self, name: &str) -> Option<&SupplyRecord> {
        self.supplies.iter().find(|supply| {
            supply
                .name
                .as_deref()
                .is_some_and(|existing| same_name(existing, name))
        })
    }

    fn supply_mut(&mut self, id: u64) -> Option<&mut SupplyRecord> {
        self.supplies.iter_mut().find(|supply| supply.id == Some(id))
    }

    /// Registers a wash and deducts its recipe from stock.
    ///
    /// Stock never goes below zero. Chemical usage is attributed by
    /// classifying each supply name; lines for unclassified supplies still
    /// draw stock. Water is ten litres per washing minute.
    pub fn register_wash(&mut self, wash: WashNew) -> ResultEngine<&WashRecord> {
        let vehicle_type_id = wash
            .vehicle_type_id
            .ok_or_else(|| EngineError::MissingField("vehicle type is mandatory".to_string()))?;
        let vehicle_type = self
            .vehicle_types
            .iter()
            .find(|vehicle_type| vehicle_type.id == vehicle_type_id)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound(format!("vehicle type {vehicle_type_id}")))?;

        let recipe = self.recipes.get(&vehicle_type_id).cloned().unwrap_or_default();
        let mut usage = ConsumptionTotals::default();
        for line in recipe {
            let Some(supply) = self.supply_mut(line.supply_id) else {
                continue;
            };
            supply.current_quantity = supply
                .current_quantity
                .saturating_sub_floor(line.ml.ml_to_litres());
            if let Some(category) = classify(supply.name.as_deref()) {
                usage.add_chemical(category, line.ml);
            }
        }

        let water = match wash.washing_minutes {
            Some(minutes) if minutes > 0 => {
                Quantity::whole(WATER_LITRES_PER_MINUTE).times(i64::from(minutes))
            }
            _ => Quantity::ZERO,
        };

        let id = next_id(&mut self.next_wash_id);
        self.washes.push(WashRecord {
            id: Some(id),
            date: Some(wash.date),
            vehicle_type: Some(vehicle_type),
            washing_minutes: wash.washing_minutes,
            water_used: Some(water),
            disinfectant_used: Some(usage.disinfectant),
            degreaser_used: Some(usage.degreaser),
            bleach_used: Some(usage.bleach),
        });

        Ok(&self.washes[self.washes.len() - 1])
    }

    /// Removes a wash and returns its recipe to stock.
    pub fn delete_wash(&mut self, id: u64) -> ResultEngine<WashRecord> {
        let index = self
            .washes
            .iter()
            .position(|wash| wash.id == Some(id))
            .ok_or_else(|| EngineError::KeyNotFound(format!("wash {id}")))?;
        let wash = self.washes.remove(index);

        if let Some(vehicle_type) = &wash.vehicle_type {
            let recipe = self.recipes.get(&vehicle_type.id).cloned().unwrap_or_default();
            for line in recipe {
                if let Some(supply) = self.supply_mut(line.supply_id) {
                    supply.current_quantity += line.ml.ml_to_litres();
                }
            }
        }

        Ok(wash)
    }

    /// Drops the whole wash log. Stock is left as it is.
    pub fn clear_washes(&mut self) -> usize {
        let removed = self.washes.len();
        self.washes.clear();
        removed
    }

    /// Adds stock to the supply with the same name (ignoring case), creating
    /// it when missing.
    pub fn restock(&mut self, name: &str, quantity: Quantity) -> ResultEngine<&SupplyRecord> {
        if name.trim().is_empty() {
            return Err(EngineError::InvalidName(
                "supply name is mandatory".to_string(),
            ));
        }
        if !quantity.is_positive() {
            return Err(EngineError::InvalidQuantity(format!(
                "restock quantity must be > 0, got {quantity}"
            )));
        }

        let index = match self.supplies.iter().position(|supply| {
            supply
                .name
                .as_deref()
                .is_some_and(|existing| same_name(existing, name))
        }) {
            Some(index) => {
                self.supplies[index].current_quantity += quantity;
                index
            }
            None => {
                let id = next_id(&mut self.next_supply_id);
                self.supplies.push(SupplyRecord {
                    id: Some(id),
                    name: Some(name.to_string()),
                    sku: Some(generate_sku(name)),
                    current_quantity: quantity,
                });
                self.supplies.len() - 1
            }
        };

        Ok(&self.supplies[index])
    }

    /// Empties every tank.
    pub fn reset_inventory(&mut self) {
        for supply in &mut self.supplies {
            supply.current_quantity = Quantity::ZERO;
        }
    }

    /// Appends a seal log entry.
    ///
    /// Seal numbers are stored as given; a bad range only shows up when the
    /// log is audited.
    pub fn add_seal_log(&mut self, entry: SealLogNew) -> ResultEngine<&SealLogRecord> {
        let driver_name = entry.driver_name.trim();
        if driver_name.is_empty() {
            return Err(EngineError::InvalidName(
                "driver name is mandatory".to_string(),
            ));
        }

        let id = next_id(&mut self.next_seal_log_id);
        self.seal_logs.push(SealLogRecord {
            id: Some(id),
            date: Some(entry.date),
            driver_name: driver_name.to_string(),
            washer_name: entry.washer_name,
            vehicle_type: entry.vehicle_type,
            license_plate: entry.license_plate,
            initial_strap: entry.initial_strap,
            final_strap: entry.final_strap,
        });

        Ok(&self.seal_logs[self.seal_logs.len() - 1])
    }

    pub fn delete_seal_log(&mut self, id: u64) -> ResultEngine<SealLogRecord> {
        let index = self
            .seal_logs
            .iter()
            .position(|log| log.id == Some(id))
            .ok_or_else(|| EngineError::KeyNotFound(format!("seal log {id}")))?;
        Ok(self.seal_logs.remove(index))
    }

    pub fn clear_seal_logs(&mut self) -> usize {
        let removed = self.seal_logs.len();
        self.seal_logs.clear();
        removed
    }
}
