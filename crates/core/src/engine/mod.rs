//! Extraction, validation and aggregation behind a single call.

mod evaluation;


pub use evaluation::{Evaluation, Status};

use tabula_shared::EngineConfig;

use crate::aggregate::Aggregator;
use crate::batch::Batch;
use crate::extract::extract_configured;
use crate::layout::TableLayout;
use crate::validation::{ValidationIssue, ValidationOptions, Validator};

/// Runs a submitted batch through the whole pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableEngine {
    validator: Validator,
}

impl TableEngine {
    /// Creates an engine.
    #[must_use]
    pub const fn new(options: ValidationOptions) -> Self {
        Self {
            validator: Validator::new(options),
        }
    }

    /// Creates an engine from the `engine` configuration section.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(ValidationOptions::from(config))
    }

    /// Options the validator runs with.
    #[must_use]
    pub const fn options(&self) -> &ValidationOptions {
        self.validator.options()
    }

    /// Checks the cells of `batch` that fall inside `layout` without aggregating.
    #[must_use]
    pub fn validate(&self, batch: &Batch, layout: &TableLayout) -> Vec<ValidationIssue> {
        self.validator.validate(&extract_configured(batch, layout))
    }

    /// Evaluates the cells of `batch` that fall inside `layout`.
    ///
    /// Figures are only computed when no rule is violated. The batch itself is
    /// never modified; use [`crate::batch::ComputedData::merge_into`] to write
    /// the figures back.
    #[must_use]
    pub fn evaluate(&self, batch: &Batch, layout: &TableLayout) -> Evaluation {
        let data = extract_configured(batch, layout);
        let issues = self.validator.validate(&data);

        if issues.is_empty() {
            let computed = Aggregator::aggregate(&data);
            tracing::debug!(
                tables = data.len(),
                rows = computed.row_count(),
                "Batch is valid"
            );
            Evaluation::Valid { data: computed }
        } else {
            tracing::debug!(
                tables = data.len(),
                issues = issues.len(),
                "Batch rejected"
            );
            Evaluation::Invalid { issues }
        }
    }
}
