//! Inventory snapshot reduction.

use serde::{Deserialize, Serialize};

use crate::{Category, Quantity, SupplyRecord, classify};

/// Stock level per category, in litres.
///
/// All three categories are always present and default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub disinfectant: Quantity,
    pub degreaser: Quantity,
    pub bleach: Quantity,
}

impl InventorySnapshot {
    pub fn get(&self, category: Category) -> Quantity {
        match category {
            Category::Disinfectant => self.disinfectant,
            Category::Degreaser => self.degreaser,
            Category::Bleach => self.bleach,
        }
    }

    fn set(&mut self, category: Category, value: Quantity) {
        match category {
            Category::Disinfectant => self.disinfectant = value,
            Category::Degreaser => self.degreaser = value,
            Category::Bleach => self.bleach = value,
        }
    }
}

/// Folds supply records into a fresh snapshot.
///
/// Each classified record overwrites its category, so the last record of a
/// category wins. Unclassified records are dropped.
pub fn reduce<'a, I>(records: I) -> InventorySnapshot
where
    I: IntoIterator<Item = &'a SupplyRecord>,
{
    records
        .into_iter()
        .fold(InventorySnapshot::default(), |mut snapshot, record| {
            if let Some(category) = classify(record.name.as_deref()) {
                snapshot.set(category, record.current_quantity);
            }
            snapshot
        })
}
