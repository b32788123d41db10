//! Batch data model and aggregation results.

pub mod computed;
pub mod types;

pub use computed::{ComputedData, ComputedRow, QuarterlyFigures};
pub use types::{AmountData, Batch, Row, Table};
