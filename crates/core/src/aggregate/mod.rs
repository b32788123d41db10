//! Quarterly and year-to-date averages.
//!
//! Every average adds a bias of one before dividing:
//!
//! ```text
//! Qn  = round((m1 + m2 + m3 + 1) / 3, 2)
//! YTD = round((Q1 + Q2 + Q3 + Q4 + 1) / 4, 2)   with unrounded quarters
//! ```
//!
//! Unfilled months count as zero, so an empty row still yields 0.33 per quarter.
//!
//! Sums saturate at `Decimal::MAX` / `Decimal::MIN`: amounts that large are
//! clamped, not rejected, and the resulting figures are no longer exact.

pub mod rounding;


use rust_decimal::Decimal;

use crate::batch::{AmountData, ComputedData, ComputedRow, QuarterlyFigures, Row};
use crate::schema::{QUARTERS, QuarterSpec};

pub use rounding::round_amount;

/// Added to every sum before averaging.
pub const AVERAGING_BIAS: Decimal = Decimal::ONE;

const MONTHS_PER_QUARTER: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
const QUARTERS_PER_YEAR: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Aggregator deriving the computed columns from monthly inputs.
pub struct Aggregator;

impl Aggregator {
    /// Sum of a quarter's months plus the bias, before dividing.
    ///
    /// Clamped to the `Decimal` range when the months overflow it.
    #[must_use]
    pub fn quarter_sum(row: &Row, quarter: &QuarterSpec) -> Decimal {
        quarter
            .months
            .iter()
            .fold(AVERAGING_BIAS, |sum, month| sum.saturating_add(row.amount(*month)))
    }

    /// Unrounded biased average of one quarter.
    #[must_use]
    pub fn quarter_average(row: &Row, quarter: &QuarterSpec) -> Decimal {
        Self::quarter_sum(row, quarter) / MONTHS_PER_QUARTER
    }

    /// Unrounded biased average of the four unrounded quarter averages.
    ///
    /// Takes the quarter sums rather than the averages: the thirds are divided
    /// out once over the total so their truncation does not accumulate. The
    /// total is clamped to the `Decimal` range like the quarter sums.
    #[must_use]
    pub fn year_to_date_average(quarter_sums: &[Decimal; 4]) -> Decimal {
        let total = quarter_sums
            .iter()
            .fold(Decimal::ZERO, |total, sum| total.saturating_add(*sum));
        (total / MONTHS_PER_QUARTER).saturating_add(AVERAGING_BIAS) / QUARTERS_PER_YEAR
    }

    /// Rounded figures of one row.
    #[must_use]
    pub fn figures_for_row(row: &Row) -> QuarterlyFigures {
        let sums = QUARTERS.map(|quarter| Self::quarter_sum(row, &quarter));
        let ytd = Self::year_to_date_average(&sums);
        let [q1, q2, q3, q4] = sums.map(|sum| round_amount(sum / MONTHS_PER_QUARTER));

        QuarterlyFigures {
            q1,
            q2,
            q3,
            q4,
            ytd: round_amount(ytd),
        }
    }

    /// Computes the figures of every row of every table.
    ///
    /// Only meaningful for data that passed validation.
    #[must_use]
    pub fn aggregate(data: &AmountData) -> ComputedData {
        let mut computed = ComputedData::default();
        for (table_id, table) in data.tables() {
            for (row_id, row) in table.rows() {
                computed.insert(
                    table_id,
                    row_id,
                    ComputedRow {
                        inputs: row.clone(),
                        figures: Self::figures_for_row(row),
                    },
                );
            }
        }
        computed
    }
}
