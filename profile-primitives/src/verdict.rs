//! Validation verdicts.

use serde::{Deserialize, Serialize};

/// Prefix carried by the single error entry of a fallback verdict.
pub const INTERNAL_ERROR_PREFIX: &str = "Internal System Error";

/// Outcome of validating one profile.
///
/// `is_valid` is `true` exactly when `errors` is empty; warnings never affect
/// it. Deserialisation is strict: the three keys must all be present with the
/// right types and no other key is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationResult {
    /// Whether the profile passed every error rule.
    pub is_valid: bool,
    /// Violated error rules, in the order reported.
    pub errors: Vec<String>,
    /// Advisory findings that do not invalidate the profile.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A passing verdict with no findings.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Builds a verdict from findings, deriving `is_valid` from `errors`.
    #[must_use]
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// The fixed verdict returned when the validation pipeline itself fails.
    #[must_use]
    pub fn fallback(description: impl AsRef<str>) -> Self {
        Self::input_error(format!(
            "{INTERNAL_ERROR_PREFIX}: {}",
            description.as_ref()
        ))
    }

    /// A failing verdict carrying one message, used for caller-side input
    /// problems such as an unreadable file.
    #[must_use]
    pub fn input_error(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    /// Returns `true` when `is_valid` agrees with `errors`.
    #[must_use]
    pub fn holds_invariant(&self) -> bool {
        self.is_valid == self.errors.is_empty()
    }

    /// Recomputes `is_valid` from `errors`, returning whether it changed.
    pub fn normalize(&mut self) -> bool {
        let expected = self.errors.is_empty();
        let changed = self.is_valid != expected;
        self.is_valid = expected;
        changed
    }

    /// Returns `true` when this verdict came from the pipeline fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        !self.is_valid
            && self.warnings.is_empty()
            && self.errors.len() == 1
            && self.errors[0].starts_with(INTERNAL_ERROR_PREFIX)
    }
}
