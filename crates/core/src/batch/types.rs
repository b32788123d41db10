//! Nested table data: batch → table → row → cell.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabula_shared::types::{RawValue, RowId, TableId};

use crate::schema::{ColumnRole, Period};

/// One year of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<Period, RawValue>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a column, if present.
    #[must_use]
    pub fn get(&self, period: Period) -> Option<&RawValue> {
        self.cells.get(&period)
    }

    /// Sets the raw value of a column.
    pub fn set(&mut self, period: Period, value: impl Into<RawValue>) {
        self.cells.insert(period, value.into());
    }

    /// Builder-style variant of [`Row::set`].
    #[must_use]
    pub fn with(mut self, period: Period, value: impl Into<RawValue>) -> Self {
        self.set(period, value);
        self
    }

    /// Returns true if the column holds a usable amount. Missing columns are empty.
    #[must_use]
    pub fn is_filled(&self, period: Period) -> bool {
        self.get(period).is_some_and(RawValue::is_filled)
    }

    /// Returns the amount of a column, with unfilled columns counting as zero.
    #[must_use]
    pub fn amount(&self, period: Period) -> Decimal {
        self.get(period).map_or(Decimal::ZERO, RawValue::amount_or_zero)
    }

    /// Input columns left empty, whether unset or blank.
    #[must_use]
    pub fn empty_inputs(&self) -> BTreeSet<Period> {
        Period::inputs()
            .filter(|period| !self.is_filled(*period))
            .collect()
    }

    /// Copy of the row keeping only columns of the given role.
    #[must_use]
    pub fn only(&self, role: ColumnRole) -> Self {
        self.cells
            .iter()
            .filter(|(period, _)| period.role() == role)
            .map(|(period, value)| (*period, value.clone()))
            .collect()
    }

    /// Iterates over the cells in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Period, &RawValue)> {
        self.cells.iter().map(|(period, value)| (*period, value))
    }

    /// Number of cells present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(Period, RawValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (Period, RawValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Rows of one table keyed by row id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: BTreeMap<RowId, Row>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a row by id.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(&id)
    }

    /// Returns a mutable row by id, creating it when missing.
    pub fn row_mut(&mut self, id: RowId) -> &mut Row {
        self.rows.entry(id).or_default()
    }

    /// Inserts or replaces a row.
    pub fn insert(&mut self, id: RowId, row: Row) {
        self.rows.insert(id, row);
    }

    /// Builder-style variant of [`Table::insert`].
    #[must_use]
    pub fn with_row(mut self, id: RowId, row: Row) -> Self {
        self.insert(id, row);
        self
    }

    /// Iterates over rows by ascending row id (most recent year first).
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &Row)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    /// Iterates over rows oldest year first, the order in which they are displayed.
    pub fn rows_chronological(&self) -> impl Iterator<Item = (RowId, &Row)> {
        self.rows.iter().rev().map(|(id, row)| (*id, row))
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<(RowId, Row)> for Table {
    fn from_iter<I: IntoIterator<Item = (RowId, Row)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Everything submitted in one validation or submission cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    tables: BTreeMap<TableId, Table>,
}

impl Batch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a table by id.
    #[must_use]
    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(&id)
    }

    /// Returns a mutable table by id, creating it when missing.
    pub fn table_mut(&mut self, id: TableId) -> &mut Table {
        self.tables.entry(id).or_default()
    }

    /// Inserts or replaces a table.
    pub fn insert(&mut self, id: TableId, table: Table) {
        self.tables.insert(id, table);
    }

    /// Builder-style variant of [`Batch::insert`].
    #[must_use]
    pub fn with_table(mut self, id: TableId, table: Table) -> Self {
        self.insert(id, table);
        self
    }

    /// Returns the value of a single cell.
    #[must_use]
    pub fn cell(&self, table: TableId, row: RowId, period: Period) -> Option<&RawValue> {
        self.table(table)?.row(row)?.get(period)
    }

    /// Iterates over tables in creation order.
    pub fn tables(&self) -> impl Iterator<Item = (TableId, &Table)> {
        self.tables.iter().map(|(id, table)| (*id, table))
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the batch has no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<(TableId, Table)> for Batch {
    fn from_iter<I: IntoIterator<Item = (TableId, Table)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

/// A batch reduced to its monthly input columns.
///
/// Only produced by extraction, so every row is guaranteed to hold nothing but
/// the twelve monthly amounts. Also remembers how many rows per table the
/// caller's layout shows, which may exceed the rows actually submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AmountData {
    batch: Batch,
    #[serde(skip)]
    rows: u32,
}

impl AmountData {
    pub(crate) fn new(batch: Batch, rows: u32) -> Self {
        Self { batch, rows }
    }

    /// Rows per table in the layout the data was extracted for.
    #[must_use]
    pub const fn configured_rows(&self) -> u32 {
        self.rows
    }

    /// Returns a table by id.
    #[must_use]
    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.batch.table(id)
    }

    /// Iterates over tables in creation order.
    pub fn tables(&self) -> impl Iterator<Item = (TableId, &Table)> {
        self.batch.tables()
    }

    /// Borrows the underlying batch.
    #[must_use]
    pub fn as_batch(&self) -> &Batch {
        &self.batch
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    /// Returns true if there are no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }
}
