//! Gap detection within a single table.
//!
//! A table's months are read as one sequence, oldest row first and January to
//! December within a row. Leading blanks are allowed; after the first entered
//! month every entered month must directly follow the previous one.

use tabula_shared::types::TableId;

use crate::batch::{AmountData, Table};
use crate::schema::Period;

/// Returns true if an entered value follows an empty one after the first entry.
///
/// Leading blanks are dropped and the rest is re-indexed from zero. The
/// positions still holding a value must then be exactly `0..n`.
#[must_use]
pub fn has_gap<I>(filled: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    filled
        .into_iter()
        .skip_while(|is_filled| !is_filled)
        .enumerate()
        .filter_map(|(position, is_filled)| is_filled.then_some(position))
        .enumerate()
        .any(|(expected, position)| expected != position)
}

/// Filled flags of every month of the table, in reading order.
pub fn filled_sequence(table: &Table) -> impl Iterator<Item = bool> + '_ {
    table
        .rows_chronological()
        .flat_map(|(_, row)| Period::inputs().map(move |period| row.is_filled(period)))
}

/// Tables with a gap between entered months, in table order.
#[must_use]
pub fn find_gaps(data: &AmountData) -> Vec<TableId> {
    data.tables()
        .filter(|(_, table)| has_gap(filled_sequence(table)))
        .map(|(table_id, _)| table_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{Batch, Row};
    use crate::extract::extract;
    use rstest::rstest;
    use tabula_shared::types::RowId;

    fn flags(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == 'x').collect()
    }

    #[rstest]
    #[case("", false)]
    #[case("______", false)]
    #[case("x", false)]
    #[case("__x", false)]
    #[case("__xxx", false)]
    #[case("__xxx___", false)]
    #[case("xxxxxx", false)]
    #[case("__x_x_", true)]
    #[case("x_x", true)]
    #[case("xx____x", true)]
    fn test_has_gap(#[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(has_gap(flags(pattern)), expected);
    }

    fn months(values: &[&str]) -> Row {
        Period::inputs()
            .zip(values.iter().copied().chain(std::iter::repeat("")))
            .fold(Row::new(), |row, (period, value)| row.with(period, value))
    }

    #[test]
    fn test_zero_is_not_a_gap() {
        let table = Table::new().with_row(RowId::new(1), months(&["", "5", "0", "7"]));
        assert!(!has_gap(filled_sequence(&table)));
    }

    #[test]
    fn test_sequence_runs_oldest_row_first() {
        // row_2 is the older year: December of row_2 is followed by January of row_1.
        let older = months(&["", "", "", "", "", "", "", "", "", "", "", "9"]);
        let newer = months(&["1", "2"]);
        let table = Table::new()
            .with_row(RowId::new(1), newer)
            .with_row(RowId::new(2), older);

        let sequence: Vec<bool> = filled_sequence(&table).collect();
        assert_eq!(sequence.len(), 24);
        assert!(sequence[11]);
        assert!(sequence[12]);
        assert!(!has_gap(sequence));
    }

    #[test]
    fn test_gap_across_rows() {
        let table = Table::new()
            .with_row(RowId::new(2), months(&["1"]))
            .with_row(RowId::new(1), months(&["1"]));
        assert!(has_gap(filled_sequence(&table)));
    }

    #[test]
    fn test_find_gaps_reports_each_offending_table() {
        let batch = Batch::new()
            .with_table(
                TableId::new(0),
                Table::new().with_row(RowId::new(1), months(&["1", "2"])),
            )
            .with_table(
                TableId::new(1),
                Table::new().with_row(RowId::new(1), months(&["1", "", "3"])),
            )
            .with_table(
                TableId::new(2),
                Table::new().with_row(RowId::new(1), months(&["", "", "", "x", "4", "", "5"])),
            );

        assert_eq!(
            find_gaps(&extract(&batch)),
            [TableId::new(1), TableId::new(2)]
        );
    }

    #[test]
    fn test_empty_table_has_no_gap() {
        let batch = Batch::new().with_table(
            TableId::new(0),
            Table::new().with_row(RowId::new(1), months(&[])),
        );
        assert!(find_gaps(&extract(&batch)).is_empty());
    }
}
