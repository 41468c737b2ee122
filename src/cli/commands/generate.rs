//! Generate command implementation
//!
//! Reads the property document, synthesizes the configuration and writes it
//! out. Nothing is written unless synthesis succeeds.

use crate::core::{render, synthesize, KeyFallbackPolicy, SynthesisOptions};
use crate::domain::Result;
use crate::properties::read_properties;
use clap::Args;
use std::io::{Read, Write};

/// Arguments controlling synthesis
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Precedence of deprecated flat key fields (both-absent, per-field)
    #[arg(
        long,
        default_value = "both-absent",
        env = "CONFIGURATOR_LEGACY_KEY_FALLBACK"
    )]
    pub legacy_key_fallback: KeyFallbackPolicy,

    /// Accepted for compatibility with job templates and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl GenerateArgs {
    /// Synthesis options selected on the command line
    pub fn options(&self) -> SynthesisOptions {
        SynthesisOptions {
            key_fallback: self.legacy_key_fallback,
        }
    }

    /// Execute the generate command
    pub fn execute(&self, input: impl Read, mut output: impl Write) -> Result<()> {
        if !self.ignored.is_empty() {
            tracing::debug!(arguments = ?self.ignored, "Ignoring positional arguments");
        }

        let properties = read_properties(input)?;
        let config = synthesize(&properties, &self.options())?;
        let yaml = render(&config)?;

        output.write_all(yaml.as_bytes())?;
        output.flush()?;

        Ok(())
    }
}
