use profile_adapters::traits::AdapterError;
use profile_prompts::PromptError;
use thiserror::Error;

/// Internal pipeline failures. Callers never see these directly; they are
/// rendered into the fallback verdict.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// No model adapter could be constructed from the configuration.
    #[error("validator unavailable: {reason}")]
    Unavailable {
        /// Why the adapter could not be built.
        reason: String,
    },

    /// The request could not be assembled.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The model call failed.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// The model reply was not JSON.
    #[error("model reply is not valid JSON: {source}")]
    MalformedReply {
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The model reply was JSON but not a verdict object.
    #[error("model reply violates the verdict contract: {reason}")]
    ContractViolation {
        /// What was wrong with the reply.
        reason: String,
    },
}
