//! Core shared types for LLM-backed profile validation.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod profile;
mod verdict;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// User profile submitted for validation.
pub use profile::{ProfileRecord, ProfileRecordBuilder};
/// Verdict returned by every validation entry point.
pub use verdict::{INTERNAL_ERROR_PREFIX, ValidationResult};
