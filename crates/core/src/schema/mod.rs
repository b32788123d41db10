//! Column schema of a yearly table.

pub mod column;
pub mod error;
pub mod period;

pub use column::{COLUMNS, ColumnRole, ColumnSpec, QUARTERS, QuarterSpec, header_labels};
pub use error::SchemaError;
pub use period::Period;
