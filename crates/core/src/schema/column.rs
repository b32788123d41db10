//! Declarative column schema shared by extraction, validation, and aggregation.

use serde::{Deserialize, Serialize};

use super::period::Period;

/// What a column is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Labels the row; never an amount.
    Identifier,
    /// Entered by the user.
    Input,
    /// Derived from inputs and always overwritten.
    Computed,
}

impl ColumnRole {
    /// Returns true if the user may type into columns of this role.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Input)
    }
}

/// A column of the yearly table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column label.
    pub period: Period,
    /// Column role.
    pub role: ColumnRole,
}

const fn column(period: Period, role: ColumnRole) -> ColumnSpec {
    ColumnSpec { period, role }
}

/// The full header, in display order.
pub const COLUMNS: [ColumnSpec; 18] = [
    column(Period::Year, ColumnRole::Identifier),
    column(Period::Jan, ColumnRole::Input),
    column(Period::Feb, ColumnRole::Input),
    column(Period::Mar, ColumnRole::Input),
    column(Period::Q1, ColumnRole::Computed),
    column(Period::Apr, ColumnRole::Input),
    column(Period::May, ColumnRole::Input),
    column(Period::Jun, ColumnRole::Input),
    column(Period::Q2, ColumnRole::Computed),
    column(Period::Jul, ColumnRole::Input),
    column(Period::Aug, ColumnRole::Input),
    column(Period::Sep, ColumnRole::Input),
    column(Period::Q3, ColumnRole::Computed),
    column(Period::Oct, ColumnRole::Input),
    column(Period::Nov, ColumnRole::Input),
    column(Period::Dec, ColumnRole::Input),
    column(Period::Q4, ColumnRole::Computed),
    column(Period::Ytd, ColumnRole::Computed),
];

/// A quarterly column and the months it averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterSpec {
    /// Computed quarter column.
    pub period: Period,
    /// Input months feeding the quarter.
    pub months: [Period; 3],
}

/// The four quarters, in order.
pub const QUARTERS: [QuarterSpec; 4] = [
    QuarterSpec {
        period: Period::Q1,
        months: [Period::Jan, Period::Feb, Period::Mar],
    },
    QuarterSpec {
        period: Period::Q2,
        months: [Period::Apr, Period::May, Period::Jun],
    },
    QuarterSpec {
        period: Period::Q3,
        months: [Period::Jul, Period::Aug, Period::Sep],
    },
    QuarterSpec {
        period: Period::Q4,
        months: [Period::Oct, Period::Nov, Period::Dec],
    },
];

/// Header labels in display order.
#[must_use]
pub fn header_labels() -> Vec<&'static str> {
    COLUMNS.iter().map(|column| column.period.label()).collect()
}
