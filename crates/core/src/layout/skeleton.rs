//! Grid description handed to the presentation layer.

use rust_decimal::Decimal;
use serde::Serialize;
use tabula_shared::types::{RawValue, RowId, TableId};

use super::TableLayout;
use crate::batch::Batch;
use crate::schema::{COLUMNS, ColumnRole, Period, header_labels};

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSkeleton {
    /// Column of the cell.
    pub period: Period,
    /// Whether the user may type into the cell.
    pub editable: bool,
    /// Value to display.
    pub value: RawValue,
}

/// One year of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSkeleton {
    /// Row id.
    pub row_id: RowId,
    /// Year the row describes.
    pub year: i32,
    /// Cells in header order.
    pub cells: Vec<CellSkeleton>,
}

/// One table of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSkeleton {
    /// Table id.
    pub table_id: TableId,
    /// Caption, `Table1` for the first table.
    pub title: String,
    /// Header labels.
    pub headers: Vec<&'static str>,
    /// Rows, oldest year first.
    pub rows: Vec<RowSkeleton>,
}

impl TableLayout {
    /// Describes every table of the layout.
    ///
    /// `previous` is the last submitted batch, if any: entered amounts and
    /// previously computed figures are carried into the cells.
    #[must_use]
    pub fn skeleton(&self, current_year: i32, previous: Option<&Batch>) -> Vec<TableSkeleton> {
        self.table_ids()
            .map(|table_id| TableSkeleton {
                table_id,
                title: format!("Table{}", table_id.index() + 1),
                headers: header_labels(),
                rows: self
                    .row_ids()
                    .map(|row_id| Self::row_skeleton(table_id, row_id, current_year, previous))
                    .collect(),
            })
            .collect()
    }

    fn row_skeleton(
        table_id: TableId,
        row_id: RowId,
        current_year: i32,
        previous: Option<&Batch>,
    ) -> RowSkeleton {
        let year = Self::year_for_row(row_id, current_year);
        let cells = COLUMNS
            .iter()
            .map(|column| {
                let value = match column.role {
                    ColumnRole::Identifier => RawValue::Number(Decimal::from(year)),
                    ColumnRole::Input | ColumnRole::Computed => previous
                        .and_then(|batch| batch.cell(table_id, row_id, column.period))
                        .cloned()
                        .unwrap_or_default(),
                };
                CellSkeleton {
                    period: column.period,
                    editable: column.role.is_editable(),
                    value,
                }
            })
            .collect();

        RowSkeleton {
            row_id,
            year,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{Row, Table};
    use rust_decimal_macros::dec;

    #[test]
    fn test_skeleton_shape() {
        let layout = TableLayout::new(2, 3).unwrap();
        let tables = layout.skeleton(2026, None);

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].title, "Table1");
        assert_eq!(tables[1].title, "Table2");
        assert_eq!(tables[0].headers.len(), 18);

        let years: Vec<i32> = tables[0].rows.iter().map(|r| r.year).collect();
        assert_eq!(years, [2024, 2025, 2026]);
        assert_eq!(tables[0].rows[2].row_id, RowId::new(1));
    }

    #[test]
    fn test_skeleton_cells() {
        let tables = TableLayout::default().skeleton(2026, None);
        let cells = &tables[0].rows[0].cells;

        assert_eq!(cells.len(), 18);
        assert_eq!(cells[0].period, Period::Year);
        assert!(!cells[0].editable);
        assert_eq!(cells[0].value.amount(), Some(dec!(2026)));

        assert_eq!(cells[1].period, Period::Jan);
        assert!(cells[1].editable);
        assert_eq!(cells[1].value, RawValue::Empty);

        assert_eq!(cells[4].period, Period::Q1);
        assert!(!cells[4].editable);
    }

    #[test]
    fn test_skeleton_carries_previous_values() {
        let previous = Batch::new().with_table(
            TableId::new(0),
            Table::new().with_row(
                RowId::new(1),
                Row::new()
                    .with(Period::Jan, "10")
                    .with(Period::Q1, dec!(3.67)),
            ),
        );

        let tables = TableLayout::default().skeleton(2026, Some(&previous));
        let cells = &tables[0].rows[0].cells;
        assert_eq!(cells[1].value, RawValue::from("10"));
        assert_eq!(cells[4].value, RawValue::Number(dec!(3.67)));
        assert_eq!(cells[5].value, RawValue::Empty);
    }
}
