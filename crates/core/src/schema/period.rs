//! Period labels of a yearly table.

use serde::{Deserialize, Deserializer, Serialize};

use super::column::{COLUMNS, ColumnRole};
use super::error::SchemaError;

/// One of the 18 fixed columns of a yearly table, in display order.
///
/// The derived ordering follows the column order, so a `BTreeMap<Period, _>`
/// iterates a row left to right. Labels are parsed with [`FromStr`], so an
/// unknown label surfaces as [`SchemaError::UnknownColumn`].
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Period {
    /// Year the row describes.
    Year,
    /// January.
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// First quarter.
    Q1,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// Second quarter.
    Q2,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// Third quarter.
    Q3,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
    /// Fourth quarter.
    Q4,
    /// Year to date.
    #[serde(rename = "YTD")]
    Ytd,
}

impl Period {
    /// All columns in display order.
    pub const ALL: [Self; 18] = [
        Self::Year,
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Q1,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Q2,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Q3,
        Self::Oct,
        Self::Nov,
        Self::Dec,
        Self::Q4,
        Self::Ytd,
    ];

    /// Position of the column in the header.
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Header label as shown in the grid and used on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Q1 => "Q1",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Q2 => "Q2",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Q3 => "Q3",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
            Self::Q4 => "Q4",
            Self::Ytd => "YTD",
        }
    }

    /// Role of the column according to the schema.
    #[must_use]
    pub const fn role(self) -> ColumnRole {
        COLUMNS[self.position()].role
    }

    /// Returns true for the twelve editable monthly columns.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self.role(), ColumnRole::Input)
    }

    /// Iterates over the columns carrying the given role, in display order.
    pub fn with_role(role: ColumnRole) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |period| period.role() == role)
    }

    /// Iterates over the editable monthly columns, January first.
    pub fn inputs() -> impl Iterator<Item = Self> {
        Self::with_role(ColumnRole::Input)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Period {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.label() == s)
            .ok_or_else(|| SchemaError::UnknownColumn(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_labels_in_header_order() {
        let labels: Vec<&str> = Period::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            [
                "Year", "Jan", "Feb", "Mar", "Q1", "Apr", "May", "Jun", "Q2", "Jul", "Aug", "Sep",
                "Q3", "Oct", "Nov", "Dec", "Q4", "YTD"
            ]
        );
    }

    #[test]
    fn test_position_matches_all() {
        for (index, period) in Period::ALL.iter().enumerate() {
            assert_eq!(period.position(), index);
        }
    }

    #[test]
    fn test_inputs_are_the_twelve_months() {
        let months: Vec<Period> = Period::inputs().collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months.first(), Some(&Period::Jan));
        assert_eq!(months.last(), Some(&Period::Dec));
        assert!(!months.contains(&Period::Q1));
    }

    #[test]
    fn test_computed_columns() {
        let computed: Vec<Period> = Period::with_role(ColumnRole::Computed).collect();
        assert_eq!(
            computed,
            [Period::Q1, Period::Q2, Period::Q3, Period::Q4, Period::Ytd]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Period::from_str("YTD").unwrap(), Period::Ytd);
        assert_eq!(Period::from_str("Jan").unwrap(), Period::Jan);
        assert!(matches!(
            Period::from_str("jan"),
            Err(SchemaError::UnknownColumn(label)) if label == "jan"
        ));
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Period::Ytd).unwrap(), "\"YTD\"");
        let period: Period = serde_json::from_str("\"Q3\"").unwrap();
        assert_eq!(period, Period::Q3);
        assert!(serde_json::from_str::<Period>("\"Ytd\"").is_err());
    }

    #[test]
    fn test_unknown_label_reports_column() {
        let err = serde_json::from_str::<Period>("\"Janvier\"").unwrap_err();
        assert!(err.to_string().contains("Unknown column: Janvier"));
    }
}
