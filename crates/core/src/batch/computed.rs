//! Results of aggregation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabula_shared::types::{RawValue, RowId, TableId};

use super::types::{Batch, Row, Table};
use crate::schema::Period;

/// Rounded quarterly and year-to-date averages of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyFigures {
    /// First quarter.
    #[serde(rename = "Q1")]
    pub q1: Decimal,
    /// Second quarter.
    #[serde(rename = "Q2")]
    pub q2: Decimal,
    /// Third quarter.
    #[serde(rename = "Q3")]
    pub q3: Decimal,
    /// Fourth quarter.
    #[serde(rename = "Q4")]
    pub q4: Decimal,
    /// Year to date.
    #[serde(rename = "YTD")]
    pub ytd: Decimal,
}

impl QuarterlyFigures {
    /// Returns the figure for a computed column.
    #[must_use]
    pub const fn get(&self, period: Period) -> Option<Decimal> {
        match period {
            Period::Q1 => Some(self.q1),
            Period::Q2 => Some(self.q2),
            Period::Q3 => Some(self.q3),
            Period::Q4 => Some(self.q4),
            Period::Ytd => Some(self.ytd),
            _ => None,
        }
    }

    /// Figures paired with their columns, in header order.
    #[must_use]
    pub const fn columns(&self) -> [(Period, Decimal); 5] {
        [
            (Period::Q1, self.q1),
            (Period::Q2, self.q2),
            (Period::Q3, self.q3),
            (Period::Q4, self.q4),
            (Period::Ytd, self.ytd),
        ]
    }

    /// Writes the figures into a row's computed columns.
    pub fn write_into(&self, row: &mut Row) {
        for (period, value) in self.columns() {
            row.set(period, value);
        }
    }
}

/// A row with its computed figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedRow {
    /// Monthly inputs, untouched.
    pub inputs: Row,
    /// Derived figures.
    pub figures: QuarterlyFigures,
}

/// Aggregation output for every row of every table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedData {
    tables: BTreeMap<TableId, BTreeMap<RowId, ComputedRow>>,
}

impl ComputedData {
    pub(crate) fn insert(&mut self, table: TableId, row: RowId, computed: ComputedRow) {
        self.tables.entry(table).or_default().insert(row, computed);
    }

    /// Returns the figures computed for a row.
    #[must_use]
    pub fn figures(&self, table: TableId, row: RowId) -> Option<&QuarterlyFigures> {
        self.tables
            .get(&table)?
            .get(&row)
            .map(|computed| &computed.figures)
    }

    /// Iterates over every computed row.
    pub fn rows(&self) -> impl Iterator<Item = (TableId, RowId, &ComputedRow)> {
        self.tables
            .iter()
            .flat_map(|(table, rows)| rows.iter().map(move |(row, computed)| (*table, *row, computed)))
    }

    /// Number of computed rows across all tables.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    /// Returns true if nothing was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Inputs and computed columns in the raw coordinate space.
    #[must_use]
    pub fn to_batch(&self) -> Batch {
        self.tables
            .iter()
            .map(|(table_id, rows)| {
                let table: Table = rows
                    .iter()
                    .map(|(row_id, computed)| {
                        let mut row = computed.inputs.clone();
                        computed.figures.write_into(&mut row);
                        (*row_id, row)
                    })
                    .collect();
                (*table_id, table)
            })
            .collect()
    }

    /// Overwrites the computed columns of `batch` in place, keeping every other cell.
    pub fn merge_into(&self, batch: &mut Batch) {
        for (table, row, computed) in self.rows() {
            computed.figures.write_into(batch.table_mut(table).row_mut(row));
        }
    }
}

impl From<&QuarterlyFigures> for Row {
    fn from(figures: &QuarterlyFigures) -> Self {
        figures
            .columns()
            .into_iter()
            .map(|(period, value)| (period, RawValue::Number(value)))
            .collect()
    }
}
