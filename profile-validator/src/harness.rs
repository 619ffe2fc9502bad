//! Adapter for prompt-evaluation test harnesses.
//!
//! The harness hands over the profile as a raw JSON string in `prompt`,
//! along with `options` and `context` payloads that are ignored here. The
//! reply is either `{"output": "<verdict JSON>"}` or
//! `{"error": "Test Error: <description>"}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use profile_primitives::ProfileRecord;

use crate::service::ValidationService;

/// Prefix of every harness error message.
pub const TEST_ERROR_PREFIX: &str = "Test Error";

/// One harness invocation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HarnessRequest {
    /// Profile JSON supplied by the test case.
    pub prompt: String,
    /// Provider options; unused.
    #[serde(default)]
    pub options: Value,
    /// Test-case context; unused.
    #[serde(default)]
    pub context: Value,
}

/// Result handed back to the harness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HarnessResponse {
    /// The verdict, serialised as a JSON string.
    Output {
        /// Compact verdict JSON.
        output: String,
    },
    /// The test case itself could not be run.
    Error {
        /// `Test Error: ...` description.
        error: String,
    },
}

impl HarnessResponse {
    /// Builds a `Test Error: ...` response.
    #[must_use]
    pub fn test_error(description: impl std::fmt::Display) -> Self {
        Self::Error {
            error: format!("{TEST_ERROR_PREFIX}: {description}"),
        }
    }
}

/// Runs one harness test case.
pub async fn call_validation(
    service: &ValidationService,
    prompt: &str,
    _options: &Value,
    _context: &Value,
) -> HarnessResponse {
    let record = match ProfileRecord::from_json_str(prompt) {
        Ok(record) => record,
        Err(err) => {
            debug!(error = %err, "harness prompt is not a profile");
            return HarnessResponse::test_error(err);
        }
    };

    let verdict = service.validate(record).await;
    match serde_json::to_string(&verdict) {
        Ok(output) => HarnessResponse::Output { output },
        Err(err) => HarnessResponse::test_error(err),
    }
}

/// Runs a decoded [`HarnessRequest`].
pub async fn handle(service: &ValidationService, request: &HarnessRequest) -> HarnessResponse {
    call_validation(service, &request.prompt, &request.options, &request.context).await
}
