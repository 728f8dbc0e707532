//! Resource consumption totals over wash records.

use serde::{Deserialize, Serialize};

use crate::{Category, Quantity, WashRecord};

/// Summed usage across a set of washes.
///
/// `water` is in litres, the chemicals in millilitres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionTotals {
    pub water: Quantity,
    #[serde(rename = "disinf")]
    pub disinfectant: Quantity,
    pub degreaser: Quantity,
    pub bleach: Quantity,
}

impl ConsumptionTotals {
    /// Adds one wash; missing fields count as zero.
    pub fn add_record(&mut self, record: &WashRecord) {
        self.water += record.water_used.unwrap_or_default();
        self.disinfectant += record.disinfectant_used.unwrap_or_default();
        self.degreaser += record.degreaser_used.unwrap_or_default();
        self.bleach += record.bleach_used.unwrap_or_default();
    }

    pub(crate) fn add_chemical(&mut self, category: Category, amount: Quantity) {
        match category {
            Category::Disinfectant => self.disinfectant += amount,
            Category::Degreaser => self.degreaser += amount,
            Category::Bleach => self.bleach += amount,
        }
    }

    pub fn chemical(&self, category: Category) -> Quantity {
        match category {
            Category::Disinfectant => self.disinfectant,
            Category::Degreaser => self.degreaser,
            Category::Bleach => self.bleach,
        }
    }
}

/// Sums the usage fields of every record.
///
/// Quantities are fixed-point, so the result does not depend on record order.
pub fn aggregate<'a, I>(records: I) -> ConsumptionTotals
where
    I: IntoIterator<Item = &'a WashRecord>,
{
    records
        .into_iter()
        .fold(ConsumptionTotals::default(), |mut totals, record| {
            totals.add_record(record);
            totals
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn wash(id: u64, water: Option<i64>, disinf: Option<i64>, bleach: Option<i64>) -> WashRecord {
        WashRecord {
            id: Some(id),
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            vehicle_type: None,
            washing_minutes: None,
            water_used: water.map(Quantity::from_millis),
            disinfectant_used: disinf.map(Quantity::from_millis),
            degreaser_used: None,
            bleach_used: bleach.map(Quantity::from_millis),
        }
    }

    #[test]
    fn empty_input_is_zero() {
        let none: [WashRecord; 0] = [];
        assert_eq!(aggregate(&none), ConsumptionTotals::default());
    }

    #[test]
    fn missing_fields_contribute_zero() {
        let records = [
            wash(1, Some(40_000), Some(250_000), None),
            wash(2, None, Some(125_500), Some(100_000)),
            wash(3, None, None, None),
        ];
        let totals = aggregate(&records);
        assert_eq!(totals.water, Quantity::whole(40));
        assert_eq!(totals.disinfectant, Quantity::from_millis(375_500));
        assert_eq!(totals.degreaser, Quantity::ZERO);
        assert_eq!(totals.chemical(Category::Bleach), Quantity::whole(100));
    }

    #[test]
    fn negative_values_are_summed_as_given() {
        let records = [wash(1, Some(10_000), None, None), wash(2, Some(-3_000), None, None)];
        assert_eq!(aggregate(&records).water, Quantity::whole(7));
    }

    #[test]
    fn serializes_with_dashboard_keys() {
        let json = serde_json::to_value(ConsumptionTotals::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"water": 0, "disinf": 0, "degreaser": 0, "bleach": 0})
        );
    }
}
