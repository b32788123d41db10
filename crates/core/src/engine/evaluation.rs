//! Outcome of an evaluation.

use serde::{Deserialize, Serialize};

use crate::batch::ComputedData;
use crate::validation::ValidationIssue;

/// Overall verdict on a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every rule holds.
    Valid,
    /// At least one rule is violated.
    Invalid,
}

impl Status {
    /// Message shown next to the verdict.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of running a batch through the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// No rule was violated; figures were computed for every row.
    Valid {
        /// Inputs and figures per table and row.
        data: ComputedData,
    },
    /// Aggregation was skipped.
    Invalid {
        /// Every violation found, ordered by table.
        issues: Vec<ValidationIssue>,
    },
}

impl Evaluation {
    /// Overall verdict.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Valid { .. } => Status::Valid,
            Self::Invalid { .. } => Status::Invalid,
        }
    }

    /// Returns true if no rule was violated.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Violations found, empty when valid.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { issues } => issues,
        }
    }

    /// Computed figures, if the batch was valid.
    #[must_use]
    pub const fn computed(&self) -> Option<&ComputedData> {
        match self {
            Self::Valid { data } => Some(data),
            Self::Invalid { .. } => None,
        }
    }
}
