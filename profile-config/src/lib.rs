//! Process-wide configuration for the profile validator.
//!
//! Loaded once at startup from the environment and read-only afterwards.
//! Variables missing from the environment may come from a `.env` file in
//! the working directory. Empty variables are treated as unset.

#![warn(missing_docs, clippy::pedantic)]

use std::collections::HashMap;
use std::path::Path;
use std::{env, fmt, time::Duration};

use profile_adapters::openai::OpenAiConfig;
use profile_adapters::traits::AdapterResult;
use thiserror::Error;
use tracing::debug;

/// Credential for the chat-completion endpoint.
pub const API_KEY_ENV: &str = "LLM_API_KEY";
/// Base URL of the chat-completion endpoint.
pub const BASE_URL_ENV: &str = "LLM_BASE_URL";
/// Model identifier.
pub const MODEL_ENV: &str = "LLM_MODEL";
/// Optional per-call timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "LLM_TIMEOUT_SECS";

/// File read by [`ValidatorConfig::from_env`] for variables the process
/// environment does not set.
pub const ENV_FILE: &str = ".env";

/// Model used when [`MODEL_ENV`] is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A timeout value was not a whole number of seconds.
    #[error("invalid {TIMEOUT_ENV} value `{value}`: expected whole seconds")]
    InvalidTimeout {
        /// The offending value.
        value: String,
    },
    /// An env file exists but could not be read or parsed.
    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        /// File that failed to load.
        path: String,
        /// Underlying parse or I/O error.
        #[source]
        source: dotenvy::Error,
    },
}

/// Validator settings: credential, endpoint, and model.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    model: String,
    timeout: Option<Duration>,
}

impl fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_owned(),
            timeout: None,
        }
    }
}

impl ValidatorConfig {
    /// Reads configuration from the process environment, then from
    /// [`ENV_FILE`] for anything the environment leaves unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if [`TIMEOUT_ENV`] is not an
    /// integer, or [`ConfigError::EnvFile`] if the env file is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_file(Path::new(ENV_FILE))
    }

    /// Like [`ValidatorConfig::from_env`] with an explicit env file. A
    /// missing file is not an error.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ValidatorConfig::from_env`].
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        Self::layered(|key| env::var(key).ok(), path)
    }

    fn layered<F>(lookup: F, path: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = read_env_file(path)?;
        Self::from_lookup(|key| lookup(key).or_else(|| file.get(key).cloned()))
    }

    /// Reads configuration through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ValidatorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let timeout = read(TIMEOUT_ENV)
            .map(|value| {
                value
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidTimeout { value })
            })
            .transpose()?;

        let config = Self {
            api_key: read(API_KEY_ENV),
            base_url: read(BASE_URL_ENV),
            model: read(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            timeout,
        };
        debug!(?config, "validator configuration loaded");
        Ok(config)
    }

    /// Sets the credential.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the endpoint base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns `true` when a credential is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the configured base URL, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Returns the model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the per-call timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Maps these settings onto the `OpenAI` adapter configuration.
    ///
    /// # Errors
    ///
    /// Propagates base URL validation failures from the adapter layer.
    pub fn openai_config(&self) -> AdapterResult<OpenAiConfig> {
        let mut config = OpenAiConfig::new(&self.model);
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url)?;
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    };

    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return Ok(HashMap::new()),
        Err(err) => return Err(to_error(err)),
    };
    let vars = entries
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)?;
    debug!(path = %path.display(), entries = vars.len(), "env file loaded");
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_model_when_unset() {
        let config = ValidatorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert!(!config.has_api_key());
        assert!(config.base_url().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = ValidatorConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "sk-test"),
            (BASE_URL_ENV, "https://llm.example.com/v1"),
            (MODEL_ENV, "llama-3-70b"),
            (TIMEOUT_ENV, "30"),
        ]))
        .unwrap();

        assert!(config.has_api_key());
        assert_eq!(config.base_url(), Some("https://llm.example.com/v1"));
        assert_eq!(config.model(), "llama-3-70b");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            ValidatorConfig::from_lookup(lookup(&[(API_KEY_ENV, "  "), (MODEL_ENV, "")])).unwrap();
        assert!(!config.has_api_key());
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let err = ValidatorConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")]))
            .expect_err("bad timeout");
        assert!(err.to_string().contains("soon"));
    }

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn env_file_fills_unset_variables() {
        let file = env_file(
            "LLM_API_KEY=sk-from-file\nLLM_MODEL=from-file\nLLM_TIMEOUT_SECS=12\n",
        );
        let config =
            ValidatorConfig::layered(lookup(&[(MODEL_ENV, "from-env")]), file.path()).unwrap();

        assert!(config.has_api_key());
        assert_eq!(config.model(), "from-env");
        assert_eq!(config.timeout(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValidatorConfig::layered(lookup(&[]), &dir.path().join(ENV_FILE)).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let file = env_file("LLM_MODEL gpt-4\n");
        let err = ValidatorConfig::layered(lookup(&[]), file.path()).expect_err("bad env file");
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ValidatorConfig::default().with_api_key("sk-secret");
        assert!(!format!("{config:?}").contains("sk-secret"));
    }

    #[test]
    fn maps_to_openai_config() {
        let config = ValidatorConfig::default()
            .with_api_key("sk-test")
            .with_base_url("http://localhost:11434/v1")
            .with_model("mistral");
        let openai = config.openai_config().unwrap();
        assert_eq!(openai.model(), "mistral");
        assert_eq!(openai.base_url(), "http://localhost:11434/v1/");
    }

    #[test]
    fn invalid_base_url_surfaces_from_mapping() {
        let config = ValidatorConfig::default().with_base_url("localhost:8080");
        assert!(config.openai_config().is_err());
    }
}
