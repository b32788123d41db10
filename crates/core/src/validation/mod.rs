//! Period alignment and gap rules.

pub mod alignment;
pub mod gaps;
pub mod types;
pub mod validator;

#[cfg(test)]
mod props;

pub use types::{IssueKind, ValidationIssue, ValidationOptions};
pub use validator::{Validator, validate};
