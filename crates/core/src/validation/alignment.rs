//! Cross-table period alignment.

use tabula_shared::types::TableId;

use super::types::ValidationOptions;
use crate::batch::{AmountData, Row, Table};

/// Returns true if the two rows leave different months empty.
#[must_use]
pub fn rows_mismatch(row: &Row, reference: &Row) -> bool {
    row.empty_inputs() != reference.empty_inputs()
}

/// Returns true if any row shared with the reference table mismatches it.
///
/// Rows missing from either table are not compared.
#[must_use]
pub fn table_mismatches(table: &Table, reference: &Table) -> bool {
    table.rows().any(|(row_id, row)| {
        reference
            .row(row_id)
            .is_some_and(|reference_row| rows_mismatch(row, reference_row))
    })
}

/// Tables whose filled periods differ from the reference table, in table order.
///
/// Nothing is reported when the reference table is absent, or when the check is
/// restricted to single-row layouts and the layout shows more than one row.
#[must_use]
pub fn find_period_mismatches(data: &AmountData, options: &ValidationOptions) -> Vec<TableId> {
    let Some(reference) = data.table(options.reference_table) else {
        if !data.is_empty() {
            tracing::debug!(
                reference = %options.reference_table,
                "Reference table absent, skipping period alignment"
            );
        }
        return Vec::new();
    };

    if options.restrict_mismatch_check_to_single_row && data.configured_rows() != 1 {
        return Vec::new();
    }

    data.tables()
        .filter(|(table_id, _)| *table_id != options.reference_table)
        .filter(|(_, table)| table_mismatches(table, reference))
        .map(|(table_id, _)| table_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Batch;
    use crate::extract::{extract, extract_configured};
    use crate::layout::TableLayout;
    use crate::schema::Period;
    use tabula_shared::types::RowId;

    fn row(filled: &[Period]) -> Row {
        Period::inputs().fold(Row::new(), |row, period| {
            if filled.contains(&period) {
                row.with(period, "1")
            } else {
                row.with(period, "")
            }
        })
    }

    fn single_row_table(filled: &[Period]) -> Table {
        Table::new().with_row(RowId::new(1), row(filled))
    }

    #[test]
    fn test_rows_mismatch_on_swapped_months() {
        assert!(rows_mismatch(&row(&[Period::Jan]), &row(&[Period::Feb])));
        assert!(!rows_mismatch(&row(&[Period::Jan]), &row(&[Period::Jan])));
    }

    #[test]
    fn test_zero_counts_as_filled() {
        let zero = Row::new().with(Period::Jan, "0");
        let blank = Row::new().with(Period::Jan, "");
        assert!(rows_mismatch(&zero, &blank));
    }

    #[test]
    fn test_values_do_not_matter_only_shape() {
        let a = Row::new().with(Period::Jan, "1");
        let b = Row::new().with(Period::Jan, "999");
        assert!(!rows_mismatch(&a, &b));
    }

    #[test]
    fn test_find_period_mismatches() {
        let batch = Batch::new()
            .with_table(TableId::new(0), single_row_table(&[Period::Jan]))
            .with_table(TableId::new(1), single_row_table(&[Period::Feb]))
            .with_table(TableId::new(2), single_row_table(&[Period::Jan]));

        let mismatched = find_period_mismatches(&extract(&batch), &ValidationOptions::default());
        assert_eq!(mismatched, [TableId::new(1)]);
    }

    #[test]
    fn test_missing_reference_skips_check() {
        let batch = Batch::new()
            .with_table(TableId::new(1), single_row_table(&[Period::Jan]))
            .with_table(TableId::new(2), single_row_table(&[Period::Feb]));

        assert!(find_period_mismatches(&extract(&batch), &ValidationOptions::default()).is_empty());
    }

    #[test]
    fn test_rows_absent_from_reference_are_ignored() {
        let batch = Batch::new()
            .with_table(TableId::new(0), single_row_table(&[Period::Jan]))
            .with_table(
                TableId::new(1),
                single_row_table(&[Period::Jan]).with_row(RowId::new(2), row(&[Period::Dec])),
            );

        assert!(find_period_mismatches(&extract(&batch), &ValidationOptions::default()).is_empty());
    }

    #[test]
    fn test_single_row_restriction() {
        let two_rows = |filled: &[Period]| {
            single_row_table(filled).with_row(RowId::new(2), row(filled))
        };
        let batch = Batch::new()
            .with_table(TableId::new(0), two_rows(&[Period::Jan]))
            .with_table(TableId::new(1), two_rows(&[Period::Feb]));
        let data = extract(&batch);

        let unrestricted = ValidationOptions::default();
        assert_eq!(find_period_mismatches(&data, &unrestricted), [TableId::new(1)]);

        let restricted = ValidationOptions {
            restrict_mismatch_check_to_single_row: true,
            ..ValidationOptions::default()
        };
        assert!(find_period_mismatches(&data, &restricted).is_empty());

        let single = Batch::new()
            .with_table(TableId::new(0), single_row_table(&[Period::Jan]))
            .with_table(TableId::new(1), single_row_table(&[Period::Feb]));
        assert_eq!(
            find_period_mismatches(&extract(&single), &restricted),
            [TableId::new(1)]
        );
    }

    #[test]
    fn test_custom_reference_table() {
        let batch = Batch::new()
            .with_table(TableId::new(0), single_row_table(&[Period::Jan]))
            .with_table(TableId::new(1), single_row_table(&[Period::Feb]));
        let options = ValidationOptions {
            reference_table: TableId::new(1),
            ..ValidationOptions::default()
        };

        assert_eq!(
            find_period_mismatches(&extract(&batch), &options),
            [TableId::new(0)]
        );
    }

    #[test]
    fn test_single_row_restriction_uses_layout_rows() {
        let batch = Batch::new()
            .with_table(TableId::new(0), single_row_table(&[Period::Jan]))
            .with_table(TableId::new(1), single_row_table(&[Period::Feb]));
        let restricted = ValidationOptions {
            restrict_mismatch_check_to_single_row: true,
            ..ValidationOptions::default()
        };

        let two_rows = extract_configured(&batch, &TableLayout::new(2, 2).unwrap());
        assert!(find_period_mismatches(&two_rows, &restricted).is_empty());

        let one_row = extract_configured(&batch, &TableLayout::new(2, 1).unwrap());
        assert_eq!(find_period_mismatches(&one_row, &restricted), [TableId::new(1)]);
    }
}
