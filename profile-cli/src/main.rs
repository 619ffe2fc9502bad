//! `validate-user`: validate a profile JSON file with an LLM.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use profile_cli::{Cli, execute};
use profile_config::ValidatorConfig;
use profile_validator::ValidatorContext;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    profile_telemetry::init_tracing();

    let cli = Cli::parse();
    let context = ValidatorContext::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "invalid validator configuration");
        ValidatorContext::unavailable(ValidatorConfig::default(), err.to_string())
    });

    let outcome = execute(cli.command(), context.service(), tokio::io::stdin()).await?;
    if let Some(stderr) = &outcome.stderr {
        eprintln!("{stderr}");
    }
    println!("{}", outcome.stdout);

    Ok(ExitCode::from(outcome.exit_code))
}
