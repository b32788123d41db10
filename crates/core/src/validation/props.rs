//! Property-based tests for extraction and validation rules.

use proptest::prelude::*;
use tabula_shared::types::{RawValue, RowId, TableId};

use super::gaps::has_gap;
use super::types::{IssueKind, ValidationOptions};
use super::validator::validate;
use crate::batch::{Batch, Row, Table};
use crate::extract::extract;
use crate::schema::Period;

/// Strategy for a single raw cell, including blanks, zero, and junk text.
fn raw_value() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Empty),
        Just(RawValue::from("")),
        Just(RawValue::from("0")),
        (-100_000i64..100_000).prop_map(RawValue::from),
        "[a-z]{1,4}".prop_map(RawValue::from),
    ]
}

/// Strategy for a full 18-column row.
fn raw_row() -> impl Strategy<Value = Row> {
    prop::collection::vec(raw_value(), 18)
        .prop_map(|values| -> Row { Period::ALL.into_iter().zip(values).collect() })
}

/// Strategy for a batch of 1-4 tables with 1-3 rows each.
fn raw_batch() -> impl Strategy<Value = Batch> {
    (1u32..=4, 1u32..=3).prop_flat_map(|(tables, rows)| {
        prop::collection::vec(raw_row(), (tables * rows) as usize).prop_map(move |cells| -> Batch {
            let mut cells = cells.into_iter();
            (0..tables)
                .map(|t| {
                    let table: Table = (1..=rows)
                        .filter_map(|r| cells.next().map(|row| (RowId::new(r), row)))
                        .collect();
                    (TableId::new(t), table)
                })
                .collect()
        })
    })
}

/// Straightforward restatement of the gap rule: once a value was entered and a
/// blank followed it, no later value may be entered.
fn gap_by_scan(flags: &[bool]) -> bool {
    let mut seen_value = false;
    let mut blank_after_value = false;
    for &filled in flags {
        if filled {
            if blank_after_value {
                return true;
            }
            seen_value = true;
        } else if seen_value {
            blank_after_value = true;
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Extraction is idempotent and leaves its input untouched.
    #[test]
    fn prop_extract_is_pure(batch in raw_batch()) {
        let before = batch.clone();
        let first = extract(&batch);
        let second = extract(&batch);

        prop_assert_eq!(&batch, &before);
        prop_assert_eq!(first, second);
    }

    /// The year and the computed columns never reach the validator.
    #[test]
    fn prop_extract_drops_non_inputs(batch in raw_batch()) {
        let amounts = extract(&batch);
        for (_, table) in amounts.tables() {
            for (_, row) in table.rows() {
                prop_assert!(row.iter().all(|(period, _)| period.is_input()));
                prop_assert_eq!(row.len(), 12);
            }
        }
        prop_assert_eq!(amounts.len(), batch.len());
    }

    /// The positional gap check agrees with a plain left-to-right scan.
    #[test]
    fn prop_has_gap_matches_scan(flags in prop::collection::vec(any::<bool>(), 0..48)) {
        prop_assert_eq!(has_gap(flags.clone()), gap_by_scan(&flags));
    }

    /// A single contiguous run, wherever it starts and ends, is never a gap.
    #[test]
    fn prop_contiguous_run_has_no_gap(
        leading in 0usize..24,
        run in 0usize..24,
        trailing in 0usize..24,
    ) {
        let flags: Vec<bool> = std::iter::repeat_n(false, leading)
            .chain(std::iter::repeat_n(true, run))
            .chain(std::iter::repeat_n(false, trailing))
            .collect();
        prop_assert!(!has_gap(flags));
    }

    /// Copies of the reference table never mismatch it, whatever the values.
    #[test]
    fn prop_identical_shapes_align(row in raw_row(), copies in 1u32..4) {
        let reference = Table::new().with_row(RowId::new(1), row.clone());
        let batch: Batch = (0..=copies)
            .map(|t| (TableId::new(t), reference.clone()))
            .collect();

        let issues = validate(&extract(&batch), &ValidationOptions::default());
        prop_assert!(issues.iter().all(|issue| issue.kind != IssueKind::PeriodMismatch));
    }

    /// Issues never name the reference table as mismatched, and never repeat.
    #[test]
    fn prop_issues_are_unique(batch in raw_batch()) {
        let issues = validate(&extract(&batch), &ValidationOptions::default());

        let mut deduped = issues.clone();
        deduped.dedup();
        prop_assert_eq!(&deduped, &issues);
        let names_reference = issues.iter().any(|issue| {
            issue.table_id == TableId::REFERENCE && issue.kind == IssueKind::PeriodMismatch
        });
        prop_assert!(!names_reference);
    }
}
