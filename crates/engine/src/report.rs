//! Tabular report shaping.
//!
//! A report is a fixed list of column headers, one row per record and a
//! single trailing totals row. The shaped report is plain data: turning it
//! into a file is left to whichever export sink receives it.

use serde::Serialize;

use crate::{
    ConsumptionTotals, Quantity, SealLogRecord, WashRecord, aggregate, seals_used,
    total_seals_used,
};

/// Marker placed in the label column of the totals row.
pub const TOTALS_LABEL: &str = "TOTAL";

/// Text shown when a wash has no vehicle type.
pub const MISSING_VEHICLE_TYPE: &str = "N/A";

const VEHICLE_TYPE: &str = "Vehicle Type";
const WATER: &str = "Water (L)";
const DISINFECTANT: &str = "Disinfectant (mL)";
const DEGREASER: &str = "Degreaser (mL)";
const BLEACH: &str = "Bleach (mL)";
const FINAL_SEAL: &str = "Final Seal";
const QTY_USED: &str = "Qty Used";

/// A single report value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Text(String),
    Count(u64),
    Quantity(Quantity),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Plain string form, empty for [`Cell::Empty`].
    pub fn render(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Count(count) => count.to_string(),
            Cell::Quantity(quantity) => quantity.to_string(),
        }
    }
}

impl From<Option<Quantity>> for Cell {
    fn from(value: Option<Quantity>) -> Self {
        value.map_or(Cell::Empty, Cell::Quantity)
    }
}

impl From<Option<u64>> for Cell {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Cell::Empty, Cell::Count)
    }
}

/// A report column: its header and how a record fills it.
pub struct Column<T> {
    pub header: &'static str,
    pub project: fn(&T) -> Cell,
}

/// Layout of the synthetic totals row.
///
/// Cells are addressed by column header, so the row follows its columns
/// whatever their order. Every cell is empty except the label and the value
/// cells; headers missing from the column list are ignored.
#[derive(Clone, Debug)]
pub struct TotalsRow {
    label_header: &'static str,
    label: String,
    values: Vec<(&'static str, Cell)>,
}

impl TotalsRow {
    pub fn new(label_header: &'static str, label: impl Into<String>) -> Self {
        Self {
            label_header,
            label: label.into(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, header: &'static str, cell: Cell) -> Self {
        self.values.push((header, cell));
        self
    }

    fn into_row<T>(self, columns: &[Column<T>]) -> Vec<Cell> {
        let position = |header: &str| columns.iter().position(|column| column.header == header);

        let mut row = vec![Cell::Empty; columns.len()];
        if let Some(index) = position(self.label_header) {
            row[index] = Cell::Text(self.label);
        }
        for (header, value) in self.values {
            if let Some(index) = position(header) {
                row[index] = value;
            }
        }
        row
    }
}

/// Ordered rows ready for export, the last row being the totals row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabularReport {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TabularReport {
    /// Rows projected from records, without the totals row.
    pub fn record_rows(&self) -> &[Vec<Cell>] {
        match self.rows.split_last() {
            Some((_, records)) => records,
            None => &[],
        }
    }

    pub fn totals_row(&self) -> Option<&[Cell]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Index of the column with the given header.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|candidate| candidate == header)
    }
}

/// Projects each record through `columns`, then appends the totals row.
pub fn shape<T>(
    title: &str,
    records: &[T],
    columns: &[Column<T>],
    totals: TotalsRow,
) -> TabularReport {
    let mut rows: Vec<Vec<Cell>> = records
        .iter()
        .map(|record| columns.iter().map(|column| (column.project)(record)).collect())
        .collect();
    rows.push(totals.into_row(columns));

    TabularReport {
        title: title.to_string(),
        headers: columns.iter().map(|column| column.header.to_string()).collect(),
        rows,
    }
}

pub const WASH_COLUMNS: [Column<WashRecord>; 8] = [
    Column {
        header: "ID",
        project: |wash| Cell::from(wash.id),
    },
    Column {
        header: "Date",
        project: |wash| wash.date.map_or(Cell::Empty, |date| Cell::Text(date.to_string())),
    },
    Column {
        header: VEHICLE_TYPE,
        project: |wash| Cell::text(wash.vehicle_type_name().unwrap_or(MISSING_VEHICLE_TYPE)),
    },
    Column {
        header: "Time (m)",
        project: |wash| Cell::from(wash.washing_minutes.map(u64::from)),
    },
    Column {
        header: WATER,
        project: |wash| Cell::from(wash.water_used),
    },
    Column {
        header: DISINFECTANT,
        project: |wash| Cell::from(wash.disinfectant_used),
    },
    Column {
        header: DEGREASER,
        project: |wash| Cell::from(wash.degreaser_used),
    },
    Column {
        header: BLEACH,
        project: |wash| Cell::from(wash.bleach_used),
    },
];

pub const SEAL_COLUMNS: [Column<SealLogRecord>; 9] = [
    Column {
        header: "ID",
        project: |log| Cell::from(log.id),
    },
    Column {
        header: "Date",
        project: |log| log.date.map_or(Cell::Empty, |date| Cell::Text(date.to_string())),
    },
    Column {
        header: "Driver",
        project: |log| Cell::text(log.driver_name.as_str()),
    },
    Column {
        header: "Operator",
        project: |log| Cell::text(log.washer_name.as_str()),
    },
    Column {
        header: "Type",
        project: |log| Cell::text(log.vehicle_type.as_str()),
    },
    Column {
        header: "Plate",
        project: |log| Cell::text(log.license_plate.as_str()),
    },
    Column {
        header: "Initial Seal",
        project: |log| Cell::text(log.initial_strap.as_deref().unwrap_or_default()),
    },
    Column {
        header: FINAL_SEAL,
        project: |log| Cell::text(log.final_strap.as_deref().unwrap_or_default()),
    },
    Column {
        header: QTY_USED,
        project: |log| Cell::from(seals_used(log)),
    },
];

/// Wash service report; the totals row carries [`ConsumptionTotals`].
pub fn wash_report(records: &[WashRecord]) -> TabularReport {
    let ConsumptionTotals {
        water,
        disinfectant,
        degreaser,
        bleach,
    } = aggregate(records);

    let totals = TotalsRow::new(VEHICLE_TYPE, TOTALS_LABEL)
        .value(WATER, Cell::Quantity(water))
        .value(DISINFECTANT, Cell::Quantity(disinfectant))
        .value(DEGREASER, Cell::Quantity(degreaser))
        .value(BLEACH, Cell::Quantity(bleach));

    shape("Washing Report", records, &WASH_COLUMNS, totals)
}

/// Seal audit report; the totals row carries the grand seal count.
pub fn seal_report(logs: &[SealLogRecord]) -> TabularReport {
    let totals = TotalsRow::new(FINAL_SEAL, TOTALS_LABEL)
        .value(QTY_USED, Cell::Count(total_seals_used(logs)));
    shape("Seals", logs, &SEAL_COLUMNS, totals)
}
