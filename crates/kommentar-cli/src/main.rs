//! Online Kommentar MCP server.
//!
//! Speaks MCP over stdin/stdout; every log line goes to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use kommentar_config::{load_config, LogFormat, LoggingConfig};

mod logging;
mod serve;

const ENV_HELP: &str = "\
Environment overrides use the KOMMENTAR_ prefix and a double underscore
between section and key, for example:
  KOMMENTAR_API__BASE_URL=http://localhost:8080/api
  KOMMENTAR_API__TIMEOUT_SECS=0
  KOMMENTAR_LOGGING__LEVEL=debug
Variables outside the api and logging sections are ignored.";

/// MCP server exposing the Online Kommentar legal commentary API.
#[derive(Debug, Parser)]
#[command(name = "onlinekommentar-mcp", version, about, after_help = ENV_HELP)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format: plain or json. Overrides the config file.
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    let logging = match &config {
        Ok(c) => c.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    logging::init(&logging, cli.verbose, cli.log_format);

    tracing::info!("Starting Online Kommentar MCP Server...");

    let handler = match config
        .map_err(anyhow::Error::from)
        .and_then(|c| serve::build_handler(&c))
    {
        Ok(handler) => handler,
        Err(e) => {
            tracing::error!("Server failed to start: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match serve::run(handler).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("server stopped: {e:#}");
            ExitCode::FAILURE
        }
    }
}
