//! Core logic for Tabula.
//!
//! Pure data processing with no web or storage dependencies. A submitted batch
//! of yearly tables flows through three stages:
//!
//! 1. `extract` keeps only the monthly inputs of every row.
//! 2. `validation` checks period alignment and gaps across the tables.
//! 3. `aggregate` derives the quarterly and year-to-date averages.
//!
//! # Modules
//!
//! - `schema` - The 18 columns of a yearly row
//! - `batch` - Raw batches, extracted amounts and computed figures
//! - `layout` - Caller-owned table and row counts
//! - `extract` - Input-only view of a batch
//! - `validation` - Period alignment and gap rules
//! - `aggregate` - Quarterly and year-to-date averages
//! - `engine` - The full pipeline behind a single call

pub mod aggregate;
pub mod batch;
pub mod engine;
pub mod extract;
pub mod layout;
pub mod schema;
pub mod validation;
