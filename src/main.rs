// credhub-configurator - deployment properties to CredHub application config
// Copyright (c) 2025 CredHub Configurator Contributors
// Licensed under the Apache License, Version 2.0

use clap::Parser;
use credhub_configurator::cli::{report_failure, Cli};
use credhub_configurator::domain::ConfiguratorError;
use credhub_configurator::logging::init_logging;
use std::io::{self, IsTerminal};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level, cli.log_format) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "credhub-configurator");

    let exit_code = match execute(&cli) {
        Ok(()) => 0,
        Err(e) => report_failure(&e, io::stderr().lock()),
    };

    process::exit(exit_code);
}

/// Run the generate command against stdin and stdout
fn execute(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(ConfiguratorError::Usage.into());
    }

    cli.generate.execute(stdin.lock(), io::stdout().lock())?;
    Ok(())
}
