//! LLM-backed user profile validation.
//!
//! [`ValidationService::validate`] is the single entry point shared by every
//! caller. It never fails: transport problems, malformed model replies, and
//! replies that break the verdict contract all collapse into the fixed
//! fallback verdict (see [`ValidationResult::fallback`]).

#![warn(missing_docs, clippy::pedantic)]

mod context;
mod error;
pub mod harness;
mod reply;
mod service;
pub mod summary;

pub use context::ValidatorContext;
pub use error::ValidationError;
pub use reply::parse_reply;
pub use service::ValidationService;

pub use profile_primitives::{ProfileRecord, ValidationResult};
