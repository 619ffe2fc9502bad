//! Prompt assembly for the LLM profile validator.
//!
//! The validator's rules live entirely in [`VALIDATION_INSTRUCTIONS`]; the
//! host never evaluates them itself. [`PromptBuilder`] pairs those
//! instructions with the caller's profile to form one chat request.

#![warn(missing_docs, clippy::pedantic)]

mod builder;
mod error;
mod instructions;
mod system;

pub use builder::PromptBuilder;
pub use error::{PromptError, PromptResult};
pub use instructions::VALIDATION_INSTRUCTIONS;
pub use system::{SystemInstruction, SystemInstructionBuilder};
