//! Validation outcome types.

use serde::{Deserialize, Serialize};
use tabula_shared::EngineConfig;
use tabula_shared::types::TableId;

/// Kind of rule a table violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// The table is filled for different periods than the reference table.
    PeriodMismatch,
    /// The table leaves empty months between entered ones.
    GapInPeriod,
}

impl IssueKind {
    /// Message shown to the user, before localization.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PeriodMismatch => "The tables are filled for different periods.",
            Self::GapInPeriod => "The row should not contain spaces between months",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PeriodMismatch => write!(f, "PeriodMismatch"),
            Self::GapInPeriod => write!(f, "GapInPeriod"),
        }
    }
}

/// A rule violation attached to the offending table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Table that violates the rule.
    pub table_id: TableId,
    /// Violated rule.
    pub kind: IssueKind,
}

impl ValidationIssue {
    /// Creates an issue.
    #[must_use]
    pub const fn new(table_id: TableId, kind: IssueKind) -> Self {
        Self { table_id, kind }
    }
}

/// Knobs of the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Table whose filled periods every other table must match.
    pub reference_table: TableId,
    /// When set, period alignment is only checked while the layout shows
    /// exactly one row per table. Off by default: alignment is checked for any
    /// number of rows.
    pub restrict_mismatch_check_to_single_row: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            reference_table: TableId::REFERENCE,
            restrict_mismatch_check_to_single_row: false,
        }
    }
}

impl From<&EngineConfig> for ValidationOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            reference_table: config.reference_table,
            restrict_mismatch_check_to_single_row: config.restrict_mismatch_check_to_single_row,
        }
    }
}
