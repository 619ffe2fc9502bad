//! Human-facing view of a verdict: a status banner plus counts.

use std::fmt;

use profile_primitives::ValidationResult;

/// Status banner and metrics derived from a [`ValidationResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerdictSummary {
    /// Mirrors `is_valid`.
    pub valid: bool,
    /// Number of errors.
    pub error_count: usize,
    /// Number of warnings.
    pub warning_count: usize,
}

impl VerdictSummary {
    /// Summarises a verdict.
    #[must_use]
    pub fn of(verdict: &ValidationResult) -> Self {
        Self {
            valid: verdict.is_valid,
            error_count: verdict.errors.len(),
            warning_count: verdict.warnings.len(),
        }
    }

    /// Banner line shown above the metrics.
    #[must_use]
    pub const fn banner(&self) -> &'static str {
        if self.valid {
            "✅ Profile is Valid"
        } else {
            "❌ Profile is Invalid"
        }
    }

    /// Short status label.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.valid { "Valid" } else { "Invalid" }
    }
}

impl fmt::Display for VerdictSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.banner())?;
        write!(
            f,
            "Status: {} | Errors: {} | Warnings: {}",
            self.status(),
            self.error_count,
            self.warning_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_with_warnings() {
        let verdict = ValidationResult::from_findings(Vec::new(), vec!["minor".to_owned()]);
        let summary = VerdictSummary::of(&verdict);
        assert_eq!(
            summary.to_string(),
            "✅ Profile is Valid\nStatus: Valid | Errors: 0 | Warnings: 1"
        );
    }

    #[test]
    fn fallback_is_invalid() {
        let summary = VerdictSummary::of(&ValidationResult::fallback("timeout"));
        assert_eq!(summary.status(), "Invalid");
        assert_eq!(summary.banner(), "❌ Profile is Invalid");
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 0);
    }
}
