//! Observability setup for the profile validator.

#![warn(missing_docs, clippy::pedantic)]

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "PROFILE_VALIDATOR_LOG";

/// Directive used when [`LOG_FILTER_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr `fmt` subscriber filtered by [`LOG_FILTER_ENV`].
///
/// Logs go to stderr so stdout stays reserved for verdict JSON. Returns
/// `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
