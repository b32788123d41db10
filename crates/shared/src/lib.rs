//! Shared identifiers, errors, and configuration for Tabula.
//!
//! This crate provides common types used across all other crates:
//! - Typed table and row identifiers (`table_<i>`, `row_<j>`)
//! - Raw cell values as entered by the user
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, EngineConfig, ServerConfig};
pub use error::AppError;
