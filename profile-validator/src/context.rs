//! Process-wide validator state.

use std::sync::Arc;

use profile_adapters::openai::OpenAiAdapter;
use profile_adapters::traits::ModelAdapter;
use profile_config::{ConfigError, ValidatorConfig};
use profile_primitives::{ProfileRecord, ValidationResult};
use tracing::{info, warn};

use crate::service::ValidationService;

/// Configuration plus the shared service, created once at startup and
/// handed to every caller.
///
/// Construction never fails on a bad credential or endpoint: the service is
/// built in an unavailable state and each `validate` call reports the cause
/// through the fallback verdict.
#[derive(Debug)]
pub struct ValidatorContext {
    config: ValidatorConfig,
    service: ValidationService,
}

impl ValidatorContext {
    /// Loads [`ValidatorConfig`] from the environment and builds the
    /// `OpenAI`-compatible adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ValidatorConfig::from_env()?))
    }

    /// Builds the context from explicit configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        let service = match config.openai_config().and_then(OpenAiAdapter::new) {
            Ok(adapter) => {
                info!(model = config.model(), "validator ready");
                ValidationService::new(Arc::new(adapter))
            }
            Err(err) => {
                warn!(error = %err, "validator adapter unavailable");
                ValidationService::unavailable(err.to_string())
            }
        };
        Self { config, service }
    }

    /// Builds a context whose every call returns the fallback verdict with
    /// `reason`, for when startup configuration could not be read.
    #[must_use]
    pub fn unavailable(config: ValidatorConfig, reason: impl Into<String>) -> Self {
        Self {
            config,
            service: ValidationService::unavailable(reason),
        }
    }

    /// Builds the context around an already-constructed adapter.
    #[must_use]
    pub fn with_adapter(config: ValidatorConfig, adapter: Arc<dyn ModelAdapter>) -> Self {
        Self {
            config,
            service: ValidationService::new(adapter),
        }
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns the shared validation service.
    #[must_use]
    pub fn service(&self) -> &ValidationService {
        &self.service
    }

    /// Shorthand for [`ValidationService::validate`].
    pub async fn validate(&self, record: ProfileRecord) -> ValidationResult {
        self.service.validate(record).await
    }
}
