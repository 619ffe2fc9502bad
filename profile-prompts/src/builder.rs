//! Chat request assembly.

use profile_adapters::traits::{InferenceRequest, MessageRole, PromptMessage, ResponseFormat};
use profile_primitives::ProfileRecord;
use tracing::trace;

use crate::error::PromptResult;
use crate::instructions::VALIDATION_INSTRUCTIONS;
use crate::system::SystemInstruction;

/// Turns a [`ProfileRecord`] into a deterministic, JSON-constrained chat
/// request: the system instruction plus the profile as compact JSON.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    instruction: SystemInstruction,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            instruction: SystemInstruction {
                content: VALIDATION_INSTRUCTIONS.trim().to_owned(),
            },
        }
    }
}

impl PromptBuilder {
    /// Creates a builder using [`VALIDATION_INSTRUCTIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the system instruction.
    #[must_use]
    pub fn with_instruction(mut self, instruction: SystemInstruction) -> Self {
        self.instruction = instruction;
        self
    }

    /// Assembles the request for one profile.
    ///
    /// # Errors
    ///
    /// Fails only if the profile cannot be serialised, which signals a
    /// programming error rather than a validation outcome.
    pub fn build(&self, record: &ProfileRecord) -> PromptResult<InferenceRequest> {
        let payload = record.to_compact_json()?;
        trace!(fields = record.len(), "assembled validation prompt");

        let request = InferenceRequest::new(vec![PromptMessage::new(MessageRole::User, payload)])?
            .with_system_prompt(self.instruction.content())
            .with_temperature(0.0)
            .with_response_format(ResponseFormat::JsonObject);
        Ok(request)
    }
}
