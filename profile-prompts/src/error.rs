//! Errors raised while assembling prompts.

use thiserror::Error;

/// Result alias for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Prompt assembly failures. These indicate programming errors, never a
/// validation outcome.
#[derive(Debug, Error)]
pub enum PromptError {
    /// A system instruction was built without content.
    #[error("system instruction must not be empty")]
    EmptyInstruction,

    /// The profile could not be encoded for the user message.
    #[error("failed to encode profile: {source}")]
    Profile {
        /// Underlying primitive error.
        #[from]
        source: profile_primitives::Error,
    },

    /// The assembled request was rejected by the adapter layer.
    #[error("failed to assemble request: {source}")]
    Request {
        /// Underlying adapter error.
        #[from]
        source: profile_adapters::traits::AdapterError,
    },
}
