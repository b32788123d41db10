//! Runs every rule over the amount data.

use super::alignment::find_period_mismatches;
use super::gaps::find_gaps;
use super::types::{IssueKind, ValidationIssue, ValidationOptions};
use crate::batch::AmountData;

/// Validator for extracted amount data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    /// Creates a validator.
    #[must_use]
    pub const fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Checks period alignment and gaps.
    ///
    /// Every violation is reported, at most once per rule and table, ordered by
    /// table and then by rule (alignment before gaps).
    #[must_use]
    pub fn validate(&self, data: &AmountData) -> Vec<ValidationIssue> {
        let mut issues: Vec<ValidationIssue> = find_period_mismatches(data, &self.options)
            .into_iter()
            .map(|table_id| ValidationIssue::new(table_id, IssueKind::PeriodMismatch))
            .chain(
                find_gaps(data)
                    .into_iter()
                    .map(|table_id| ValidationIssue::new(table_id, IssueKind::GapInPeriod)),
            )
            .collect();
        issues.sort_unstable();
        issues
    }
}

/// Shorthand for `Validator::new(*options).validate(data)`.
#[must_use]
pub fn validate(data: &AmountData, options: &ValidationOptions) -> Vec<ValidationIssue> {
    Validator::new(*options).validate(data)
}
