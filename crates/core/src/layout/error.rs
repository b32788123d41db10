//! Layout error types.

use thiserror::Error;

/// Layout-related errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A layout must show at least one table.
    #[error("Layout must contain at least one table")]
    NoTables,

    /// A layout must show at least one row.
    #[error("Layout must contain at least one row")]
    NoRows,

    /// More tables than allowed.
    #[error("Too many tables: {requested} requested, at most {max} allowed")]
    TooManyTables {
        /// Requested number of tables.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },

    /// More rows than allowed.
    #[error("Too many rows: {requested} requested, at most {max} allowed")]
    TooManyRows {
        /// Requested number of rows.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },
}
