//! Extraction of monthly amounts from a raw batch.

use crate::batch::{AmountData, Batch, Table};
use crate::layout::TableLayout;
use crate::schema::ColumnRole;

/// Strips the year and every computed column from each row.
///
/// Pure: the input is never modified and the result is the same on every call.
/// Without a layout, the highest submitted row id stands for the row count.
#[must_use]
pub fn extract(batch: &Batch) -> AmountData {
    let rows = batch
        .tables()
        .filter_map(|(_, table)| table.rows().map(|(row_id, _)| row_id.index()).max())
        .max()
        .unwrap_or(0);

    AmountData::new(
        batch
            .tables()
            .map(|(table_id, table)| (table_id, inputs_of(table)))
            .collect(),
        rows,
    )
}

/// Like [`extract`], restricted to the tables and rows of the caller's layout.
///
/// Cells addressed outside the layout (for example a table that was submitted
/// but is no longer shown) are ignored.
#[must_use]
pub fn extract_configured(batch: &Batch, layout: &TableLayout) -> AmountData {
    AmountData::new(
        batch
            .tables()
            .filter(|(table_id, _)| layout.contains_table(*table_id))
            .map(|(table_id, table)| {
                let rows: Table = table
                    .rows()
                    .filter(|(row_id, _)| layout.contains_row(*row_id))
                    .map(|(row_id, row)| (row_id, row.only(ColumnRole::Input)))
                    .collect();
                (table_id, rows)
            })
            .collect(),
        layout.rows(),
    )
}

fn inputs_of(table: &Table) -> Table {
    table
        .rows()
        .map(|(row_id, row)| (row_id, row.only(ColumnRole::Input)))
        .collect()
}
