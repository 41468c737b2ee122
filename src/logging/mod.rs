//! Logging and observability
//!
//! Structured logging to stderr with:
//! - Human-readable or JSON-formatted events
//! - Configurable log levels, overridable through `RUST_LOG`
//!
//! Secrets never reach a log line: passwords and key material are carried as
//! `SecretString`, whose `Debug` output is redacted.
//!
//! # Example
//!
//! ```no_run
//! use credhub_configurator::logging::{init_logging, LogFormat};
//!
//! init_logging("info", LogFormat::Json).expect("Failed to initialize logging");
//!
//! tracing::info!(providers = 2, "Synthesized application configuration");
//! ```

pub mod structured;

pub use structured::{init_logging, LogFormat};
