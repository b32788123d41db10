//! Typed identifiers for tables and rows.
//!
//! Identifiers travel as `table_<index>` and `row_<index>` strings. The typed
//! wrappers prevent accidentally passing a `RowId` where a `TableId` is expected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when an identifier string does not follow `<prefix>_<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} identifier: {value:?}")]
pub struct IdParseError {
    /// Expected prefix (`table` or `row`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Macro to generate index-based typed ID wrappers.
macro_rules! indexed_id {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Textual prefix used on the wire.
            pub const PREFIX: &'static str = $prefix;

            /// Creates an ID from its numeric index.
            #[must_use]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Returns the numeric index.
            #[must_use]
            pub const fn index(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix($prefix)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|digits| digits.parse().ok())
                    .map(Self)
                    .ok_or_else(|| IdParseError {
                        kind: $prefix,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

indexed_id!(
    TableId,
    "table",
    "Identifier of a table, 0-based in creation order."
);
indexed_id!(
    RowId,
    "row",
    "Identifier of a row, 1-based and counted back from the most recent year."
);

impl TableId {
    /// The first-created table, against which every other table is aligned.
    pub const REFERENCE: Self = Self(0);
}

impl Default for TableId {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
