//! Tracing setup. Stdout carries protocol frames only, so all output
//! is written to stderr.

use tracing_subscriber::EnvFilter;

use kommentar_config::{LogFormat, LoggingConfig};

/// Picks the filter directive: `-v` and `-vv` win over the configured level.
pub(crate) fn filter_directive(config: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => config.level.as_str(),
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// An unparsable level falls back to `info` with a warning rather than
/// aborting startup.
pub(crate) fn init(config: &LoggingConfig, verbose: u8, format_override: Option<LogFormat>) {
    let directive = filter_directive(config, verbose);
    let (filter, rejected) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format_override.unwrap_or(config.format) {
        LogFormat::Json => builder.json().with_target(true).init(),
        LogFormat::Plain => builder.with_ansi(false).init(),
    }

    if let Some(e) = rejected {
        tracing::warn!(directive, error = %e, "invalid log level, using info");
    }
}
