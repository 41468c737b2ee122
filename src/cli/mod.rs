//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the configurator
//! using clap. The tool takes no subcommand: it reads the property document
//! from stdin and writes the application configuration to stdout.

pub mod commands;

use crate::domain::ConfiguratorError;
use crate::logging::LogFormat;
use clap::Parser;
use std::io::Write;

/// Exit code for failures that carry no [`ConfiguratorError`]
const FALLBACK_EXIT_CODE: i32 = 6;

/// Translates deployment properties into the credential service's application.yml
#[derive(Parser, Debug)]
#[command(name = "credhub-configurator")]
#[command(version, about, long_about = None)]
#[command(override_usage = "<json> | credhub-configurator")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", env = "CONFIGURATOR_LOG_LEVEL")]
    pub log_level: String,

    /// Log output format on stderr (text, json)
    #[arg(long, default_value = "text", env = "CONFIGURATOR_LOG_FORMAT")]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub generate: commands::generate::GenerateArgs,
}

/// Writes the failure message once and returns the process exit code
///
/// The message is the error's own text with no prefix, so a usage error
/// prints exactly the usage line.
pub fn report_failure(error: &anyhow::Error, mut out: impl Write) -> i32 {
    let code = error
        .downcast_ref::<ConfiguratorError>()
        .map(ConfiguratorError::exit_code)
        .unwrap_or(FALLBACK_EXIT_CODE);

    tracing::debug!(exit_code = code, "Configuration synthesis failed");
    // stderr already gone; nothing left to report to
    let _ = writeln!(out, "{error}");

    code
}
