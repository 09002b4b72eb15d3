//! Repository explorer CLI entrypoint.
//!
//! Shows one page of repository search results, or one repository with a
//! page of its issues, depending on the configured options.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use repo_explorer::{ExplorerConfig, ExplorerError, OperationMode};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cli::Outcome;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "REPO_EXPLORER_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let result = run().await;
    exit_code(&mut io::stderr().lock(), result)
}

/// Maps a run result to the process exit code, writing any error to
/// `stderr`.
fn exit_code<W: Write>(stderr: &mut W, result: Result<Outcome, ExplorerError>) -> ExitCode {
    match result {
        Ok(Outcome::Shown) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Err(error) => {
            // Exit status carries the failure even when stderr is gone.
            writeln!(stderr, "{error}").unwrap_or_default();
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<Outcome, ExplorerError> {
    let config = load_config()?;
    let token = config.resolve_token()?;

    match config.operation_mode()? {
        OperationMode::Search => cli::search::run(&config, &token).await,
        OperationMode::Repository => cli::repository::run(&config, &token).await,
    }
}

/// Installs a stderr subscriber filtered by `REPO_EXPLORER_LOG`, defaulting
/// to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ExplorerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ExplorerConfig, ExplorerError> {
    ExplorerConfig::load().map_err(|error| ExplorerError::Configuration {
        message: error.to_string(),
    })
}
