//! Caller-owned table and row counts.
//!
//! The engine never stores how many tables or rows a user has added. The
//! presentation layer keeps a [`TableLayout`] per session and hands it in on
//! every call.

pub mod error;
pub mod skeleton;

use serde::Serialize;
use tabula_shared::types::{RowId, TableId};

pub use error::LayoutError;
pub use skeleton::{CellSkeleton, RowSkeleton, TableSkeleton};

/// Number of tables and rows currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableLayout {
    tables: u32,
    rows: u32,
}

impl TableLayout {
    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero.
    pub fn new(tables: u32, rows: u32) -> Result<Self, LayoutError> {
        if tables == 0 {
            return Err(LayoutError::NoTables);
        }
        if rows == 0 {
            return Err(LayoutError::NoRows);
        }
        Ok(Self { tables, rows })
    }

    /// Number of tables.
    #[must_use]
    pub const fn tables(&self) -> u32 {
        self.tables
    }

    /// Number of rows per table.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Adds a table after the existing ones.
    pub fn add_table(&mut self) {
        self.tables = self.tables.saturating_add(1);
    }

    /// Adds one earlier year to every table.
    pub fn add_row(&mut self) {
        self.rows = self.rows.saturating_add(1);
    }

    /// Table ids in creation order.
    pub fn table_ids(&self) -> impl Iterator<Item = TableId> {
        (0..self.tables).map(TableId::new)
    }

    /// Row ids in display order, oldest year first.
    pub fn row_ids(&self) -> impl Iterator<Item = RowId> {
        (1..=self.rows).rev().map(RowId::new)
    }

    /// Returns true if the table is part of the layout.
    #[must_use]
    pub const fn contains_table(&self, id: TableId) -> bool {
        id.index() < self.tables
    }

    /// Returns true if the row is part of the layout.
    #[must_use]
    pub const fn contains_row(&self, id: RowId) -> bool {
        id.index() >= 1 && id.index() <= self.rows
    }

    /// Year shown in a row: `row_1` is the current year, each further row one year earlier.
    #[must_use]
    pub fn year_for_row(row: RowId, current_year: i32) -> i32 {
        let offset = i32::try_from(row.index()).unwrap_or(i32::MAX);
        current_year.saturating_add(1).saturating_sub(offset)
    }

    /// Checks the layout against upper bounds.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first count over its bound.
    pub fn check_limits(&self, max_tables: u32, max_rows: u32) -> Result<(), LayoutError> {
        if self.tables > max_tables {
            return Err(LayoutError::TooManyTables {
                requested: self.tables,
                max: max_tables,
            });
        }
        if self.rows > max_rows {
            return Err(LayoutError::TooManyRows {
                requested: self.rows,
                max: max_rows,
            });
        }
        Ok(())
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self { tables: 1, rows: 1 }
    }
}
