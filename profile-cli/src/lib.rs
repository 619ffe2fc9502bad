//! Command-line front end for the profile validator.
//!
//! `validate-user <input_file.json>` prints the verdict as indented JSON.
//! Problems with the input file are reported as a failing verdict on stdout
//! with exit status 0; only a missing argument exits with status 1.

#![warn(missing_docs, clippy::pedantic)]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use profile_primitives::{Error as ProfileError, ProfileRecord, ValidationResult};
use profile_validator::ValidationService;
use profile_validator::harness::{self, HarnessRequest, HarnessResponse};
use profile_validator::summary::VerdictSummary;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

/// Usage line printed when no input file is given.
pub const USAGE: &str = "Usage: validate-user <input_file.json>";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "validate-user",
    version,
    about = "Validate a user profile JSON file with an LLM"
)]
pub struct Cli {
    /// Profile JSON file to validate.
    pub input: Option<PathBuf>,

    /// Arguments after the input file; ignored.
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Also print a status banner and error/warning counts to stderr.
    #[arg(long)]
    pub summary: bool,

    /// Answer one test-harness request (`{"prompt": ...}`) read from stdin.
    #[arg(long, conflicts_with_all = ["input", "summary"])]
    pub harness: bool,
}

/// What a parsed command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// No input given: print usage and fail.
    Usage,
    /// Validate one profile file.
    Validate {
        /// Path to the profile JSON.
        input: PathBuf,
        /// Whether to print the summary to stderr.
        summary: bool,
    },
    /// Serve one harness request from stdin.
    Harness,
}

impl Cli {
    /// Resolves the arguments into a [`Command`].
    #[must_use]
    pub fn command(&self) -> Command {
        if self.harness {
            return Command::Harness;
        }
        match &self.input {
            Some(input) => Command::Validate {
                input: input.clone(),
                summary: self.summary,
            },
            None => Command::Usage,
        }
    }
}

/// Everything a run writes, plus its exit status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout.
    pub stdout: String,
    /// Optional text for stderr.
    pub stderr: Option<String>,
    /// Process exit status.
    pub exit_code: u8,
}

impl Outcome {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            stderr: None,
            exit_code: 0,
        }
    }
}

/// Runs one command against `service`, reading harness input from `stdin`.
///
/// # Errors
///
/// Fails only if stdin cannot be read or output cannot be encoded.
pub async fn execute<R>(command: Command, service: &ValidationService, stdin: R) -> Result<Outcome>
where
    R: AsyncRead + Unpin,
{
    match command {
        Command::Usage => Ok(Outcome {
            stdout: USAGE.to_owned(),
            stderr: None,
            exit_code: 1,
        }),
        Command::Validate { input, summary } => {
            let verdict = validate_file(service, &input).await;
            let mut outcome = Outcome::ok(render(&verdict)?);
            if summary {
                outcome.stderr = Some(VerdictSummary::of(&verdict).to_string());
            }
            Ok(outcome)
        }
        Command::Harness => {
            let mut raw = String::new();
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut raw)
                .await
                .context("failed to read harness request from stdin")?;
            let response = answer_harness(service, &raw).await;
            let stdout =
                serde_json::to_string(&response).context("failed to encode harness response")?;
            Ok(Outcome::ok(stdout))
        }
    }
}

/// Reads, parses, and validates one profile file.
///
/// File and JSON problems become a failing verdict rather than an error.
pub async fn validate_file(service: &ValidationService, path: &Path) -> ValidationResult {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return ValidationResult::input_error(format!("File not found: {}", path.display()));
        }
        Err(err) => {
            return ValidationResult::input_error(format!("Failed to read input file: {err}"));
        }
    };

    let record = match ProfileRecord::from_json_slice(&bytes) {
        Ok(record) => record,
        Err(ProfileError::Serialization { source }) => {
            debug!(error = %source, path = %path.display(), "input file is not JSON");
            return ValidationResult::input_error("Invalid JSON format in input file");
        }
        Err(err) => {
            return ValidationResult::input_error(format!("Invalid profile in input file: {err}"));
        }
    };

    service.validate(record).await
}

/// Decodes a raw harness request and answers it.
pub async fn answer_harness(service: &ValidationService, raw: &str) -> HarnessResponse {
    match serde_json::from_str::<HarnessRequest>(raw) {
        Ok(request) => harness::handle(service, &request).await,
        Err(err) => HarnessResponse::test_error(err),
    }
}

/// Renders a verdict as two-space indented JSON.
///
/// # Errors
///
/// Fails only if serialisation fails.
pub fn render(verdict: &ValidationResult) -> Result<String> {
    serde_json::to_string_pretty(verdict).context("failed to encode verdict")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::Value;
    use tempfile::NamedTempFile;

    use super::*;

    fn offline() -> ValidationService {
        ValidationService::unavailable("offline")
    }

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).expect("valid arguments").command()
    }

    fn profile_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse(&["validate-user"]), Command::Usage);
        assert_eq!(
            parse(&["validate-user", "user.json", "--summary"]),
            Command::Validate {
                input: PathBuf::from("user.json"),
                summary: true,
            }
        );
        assert_eq!(parse(&["validate-user", "--harness"]), Command::Harness);
        assert_eq!(
            parse(&["validate-user", "user.json", "extra", "args"]),
            Command::Validate {
                input: PathBuf::from("user.json"),
                summary: false,
            }
        );
        assert!(Cli::try_parse_from(["validate-user", "user.json", "--harness"]).is_err());
    }

    #[tokio::test]
    async fn missing_argument_prints_usage_and_exits_one() {
        let outcome = execute(Command::Usage, &offline(), tokio::io::empty())
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, 1);
        assert!(outcome.stdout.starts_with("Usage:"));
    }

    #[tokio::test]
    async fn missing_file_is_reported_as_verdict_with_exit_zero() {
        let command = parse(&["validate-user", "missing.json"]);
        let outcome = execute(command, &offline(), tokio::io::empty())
            .await
            .unwrap();

        assert_eq!(outcome.exit_code, 0);
        let verdict: Value = serde_json::from_str(&outcome.stdout).unwrap();
        assert_eq!(verdict["is_valid"], Value::Bool(false));
        assert!(verdict["errors"][0].as_str().unwrap().contains("File not found"));
        assert_eq!(verdict["warnings"], Value::Array(Vec::new()));
    }

    #[tokio::test]
    async fn invalid_json_file_is_reported_as_verdict() {
        let file = profile_file("{ name: oops");
        let verdict = validate_file(&offline(), file.path()).await;
        assert_eq!(
            verdict,
            ValidationResult::input_error("Invalid JSON format in input file")
        );
    }

    #[tokio::test]
    async fn non_object_file_is_reported_as_verdict() {
        let file = profile_file("[\"Aarav\"]");
        let verdict = validate_file(&offline(), file.path()).await;
        assert!(!verdict.is_valid);
        assert!(verdict.errors[0].starts_with("Invalid profile in input file"));
    }

    #[tokio::test]
    async fn valid_file_reaches_the_service() {
        let file = profile_file(r#"{"name": "Aarav Patel", "country": "IN"}"#);
        let verdict = validate_file(&offline(), file.path()).await;
        assert!(verdict.is_fallback());
        assert!(verdict.errors[0].contains("offline"));
    }

    #[tokio::test]
    async fn output_is_indented_with_two_spaces() {
        let file = profile_file("{}");
        let command = Command::Validate {
            input: file.path().to_path_buf(),
            summary: true,
        };
        let outcome = execute(command, &offline(), tokio::io::empty())
            .await
            .unwrap();

        assert!(outcome.stdout.starts_with("{\n  \"is_valid\": false,\n  \"errors\": [\n    "));
        let summary = outcome.stderr.expect("summary requested");
        assert!(summary.contains("Profile is Invalid"));
        assert!(summary.contains("Errors: 1"));
    }

    #[tokio::test]
    async fn harness_mode_answers_from_stdin() {
        let stdin: &[u8] = br#"{"prompt": "not valid json", "options": {}, "context": {}}"#;
        let outcome = execute(Command::Harness, &offline(), stdin).await.unwrap();

        let response: Value = serde_json::from_str(&outcome.stdout).unwrap();
        assert!(response["error"].as_str().unwrap().contains("Test Error"));
        assert_eq!(outcome.exit_code, 0);
    }

    #[tokio::test]
    async fn harness_mode_rejects_malformed_request() {
        let response = answer_harness(&offline(), "prompt=1").await;
        assert!(matches!(response, HarnessResponse::Error { .. }));
    }
}
