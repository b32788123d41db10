//! Raw cell values as they arrive from the grid.
//!
//! A cell may hold text, a number, or nothing at all. Amounts are read with
//! `rust_decimal::Decimal`; floating-point never touches a cell.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A value entered into a single grid cell.
///
/// `Empty` (JSON `null`) and the empty string are both unfilled. The literal
/// zero, as text or as a number, is filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// No value was supplied.
    #[default]
    Empty,
    /// Text as typed into the cell.
    Text(String),
    /// A numeric value.
    Number(Decimal),
}

impl RawValue {
    /// Returns the numeric amount held by the cell, if any.
    ///
    /// Text is trimmed and parsed as a plain or scientific decimal. Text that
    /// does not parse is malformed and yields `None`, exactly like an empty cell.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Empty => None,
            Self::Number(value) => Some(*value),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .ok()
            }
        }
    }

    /// Returns the amount, treating unfilled cells as zero.
    #[must_use]
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount().unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the cell carries a usable amount.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.amount().is_some()
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}
