//! Schema error types.

use thiserror::Error;

/// Schema-related errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Label is not one of the 18 table columns.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
