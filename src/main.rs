//! Mailroom CLI entrypoint for interactive notification triage.

use std::io::{self, Write};
use std::process::ExitCode;

use mailroom::{MailroomConfig, TriageError};
use ortho_config::OrthoConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ignored = writeln!(io::stderr().lock(), "{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), TriageError> {
    let config = load_config()?;
    cli::triage::run(&config).await?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`TriageError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MailroomConfig, TriageError> {
    MailroomConfig::load().map_err(|error| TriageError::Configuration {
        message: error.to_string(),
    })
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(io::stderr))
        .with(filter)
        .init();
}
