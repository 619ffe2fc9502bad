//! Shared error definitions for profile primitives.

use thiserror::Error;

/// Result alias used throughout the validator workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling profile primitive types.
#[derive(Debug, Error)]
pub enum Error {
    /// The profile could not be encoded or decoded as JSON.
    #[error("profile serialization failed: {source}")]
    Serialization {
        /// Source error from `serde_json`.
        #[from]
        source: serde_json::Error,
    },

    /// The supplied JSON was well-formed but not a profile object.
    #[error("invalid profile: {reason}")]
    InvalidProfile {
        /// Human-readable reason for rejection.
        reason: String,
    },
}

impl Error {
    /// Convenience constructor for profile shape failures.
    #[must_use]
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            reason: reason.into(),
        }
    }
}
