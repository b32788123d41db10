//! Common types used across the application.

pub mod cell;
pub mod id;

pub use cell::RawValue;
pub use id::{IdParseError, RowId, TableId};
