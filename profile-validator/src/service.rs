//! The validation pipeline.

use std::fmt;
use std::sync::Arc;

use profile_adapters::traits::{ModelAdapter, collect_text};
use profile_primitives::{ProfileRecord, ValidationResult};
use profile_prompts::PromptBuilder;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::reply::parse_reply;

enum Backend {
    Ready(Arc<dyn ModelAdapter>),
    Unavailable(String),
}

/// Validates profiles with one model call each.
///
/// Calls share nothing but the adapter handle, so one service may be used
/// concurrently. There is no retry, cache, or timeout beyond what the
/// adapter applies: every call is exactly one round trip.
pub struct ValidationService {
    backend: Backend,
    prompts: PromptBuilder,
}

impl fmt::Debug for ValidationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = match &self.backend {
            Backend::Ready(adapter) => format!(
                "{}:{}",
                adapter.metadata().provider(),
                adapter.metadata().model()
            ),
            Backend::Unavailable(reason) => format!("unavailable ({reason})"),
        };
        f.debug_struct("ValidationService")
            .field("backend", &backend)
            .finish_non_exhaustive()
    }
}

impl ValidationService {
    /// Creates a service backed by the supplied adapter.
    #[must_use]
    pub fn new(adapter: Arc<dyn ModelAdapter>) -> Self {
        Self {
            backend: Backend::Ready(adapter),
            prompts: PromptBuilder::new(),
        }
    }

    /// Creates a service with no usable adapter. Every call returns the
    /// fallback verdict carrying `reason`.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            backend: Backend::Unavailable(reason.into()),
            prompts: PromptBuilder::new(),
        }
    }

    /// Returns `true` when an adapter is configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Validates one profile. Never fails; pipeline errors become
    /// [`ValidationResult::fallback`].
    pub async fn validate(&self, record: ProfileRecord) -> ValidationResult {
        match self.try_validate(&record).await {
            Ok(verdict) => {
                debug!(
                    is_valid = verdict.is_valid,
                    errors = verdict.errors.len(),
                    warnings = verdict.warnings.len(),
                    "profile validated"
                );
                verdict
            }
            Err(err) => {
                warn!(error = %err, "validation pipeline failed; returning fallback verdict");
                ValidationResult::fallback(err.to_string())
            }
        }
    }

    /// Runs the pipeline, surfacing the failure instead of the fallback.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] hit by any pipeline step.
    pub async fn try_validate(
        &self,
        record: &ProfileRecord,
    ) -> Result<ValidationResult, ValidationError> {
        let adapter = match &self.backend {
            Backend::Ready(adapter) => adapter,
            Backend::Unavailable(reason) => {
                return Err(ValidationError::Unavailable {
                    reason: reason.clone(),
                });
            }
        };

        let request = self.prompts.build(record)?;
        debug!(
            provider = adapter.metadata().provider(),
            model = adapter.metadata().model(),
            "requesting verdict"
        );
        let stream = adapter.infer(request).await?;
        let text = collect_text(stream).await?;
        parse_reply(&text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures::stream;
    use profile_adapters::traits::{
        AdapterError, AdapterMetadata, AdapterResult, AdapterStream, InferenceChunk,
        InferenceRequest,
    };
    use profile_primitives::INTERNAL_ERROR_PREFIX;

    use super::*;

    struct ScriptedAdapter {
        metadata: AdapterMetadata,
        reply: Result<&'static str, &'static str>,
        requests: Mutex<Vec<InferenceRequest>>,
    }

    impl ScriptedAdapter {
        fn replying(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                metadata: AdapterMetadata::new("scripted", "test-model"),
                reply: Ok(reply),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(reason: &'static str) -> Arc<Self> {
            Arc::new(Self {
                metadata: AdapterMetadata::new("scripted", "test-model"),
                reply: Err(reason),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ModelAdapter for ScriptedAdapter {
        fn metadata(&self) -> &AdapterMetadata {
            &self.metadata
        }

        async fn infer(&self, request: InferenceRequest) -> AdapterResult<AdapterStream> {
            self.requests.lock().unwrap().push(request);
            match self.reply {
                Ok(text) => Ok(Box::pin(stream::once(async move {
                    Ok::<_, AdapterError>(InferenceChunk::new(text, true))
                }))),
                Err(reason) => Err(AdapterError::transport(reason)),
            }
        }
    }

    fn profile() -> ProfileRecord {
        ProfileRecord::builder()
            .name("John")
            .email("j@test.com")
            .age(25)
            .country("US")
            .phone("9876543210")
            .build()
    }

    #[tokio::test]
    async fn returns_model_verdict() {
        let adapter = ScriptedAdapter::replying(
            r#"{"is_valid": false, "errors": ["phone 9876543210 is not in E.164 format"], "warnings": []}"#,
        );
        let service = ValidationService::new(adapter.clone());

        let verdict = service.validate(profile()).await;
        assert!(!verdict.is_valid);
        assert_eq!(verdict.errors, ["phone 9876543210 is not in E.164 format"]);
        assert!(!verdict.is_fallback());

        let requests = adapter.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].messages()[0].content(),
            profile().to_compact_json().unwrap()
        );
    }

    #[tokio::test]
    async fn transport_failure_becomes_fallback() {
        let service = ValidationService::new(ScriptedAdapter::failing("connection refused"));
        let verdict = service.validate(profile()).await;

        assert!(verdict.is_fallback());
        assert!(verdict.errors[0].starts_with(&format!("{INTERNAL_ERROR_PREFIX}: ")));
        assert!(verdict.errors[0].contains("connection refused"));
    }

    #[tokio::test]
    async fn non_json_reply_becomes_fallback() {
        let service = ValidationService::new(ScriptedAdapter::replying("The profile looks valid."));
        let verdict = service.validate(profile()).await;
        assert!(verdict.is_fallback());
        assert!(verdict.errors[0].contains("not valid JSON"));
    }

    #[tokio::test]
    async fn schema_violation_becomes_fallback() {
        let service = ValidationService::new(ScriptedAdapter::replying(
            r#"{"valid": true, "problems": []}"#,
        ));
        let verdict = service.validate(profile()).await;
        assert!(verdict.is_fallback());
        assert!(verdict.errors[0].contains("verdict contract"));
    }

    #[tokio::test]
    async fn unavailable_service_never_calls_out() {
        let service = ValidationService::unavailable("OpenAI adapter requires an API key");
        assert!(!service.is_available());

        let verdict = service.validate(profile()).await;
        assert!(verdict.is_fallback());
        assert!(verdict.errors[0].contains("requires an API key"));
    }

    #[tokio::test]
    async fn try_validate_exposes_the_cause() {
        let service = ValidationService::new(ScriptedAdapter::failing("dns"));
        let err = service.try_validate(&profile()).await.expect_err("transport");
        assert!(matches!(err, ValidationError::Adapter(AdapterError::Transport { .. })));
    }
}
