// credhub-configurator - deployment properties to CredHub application config
// Copyright (c) 2025 CredHub Configurator Contributors
// Licensed under the Apache License, Version 2.0

//! # credhub-configurator
//!
//! Translates the JSON property document a deployment orchestrator renders for
//! the CredHub job into the service's `application.yml`. The tool runs once per
//! deployment: the document arrives on stdin, the configuration leaves on stdout.
//!
//! ## Overview
//!
//! This library provides:
//! - **Decoding** the property document, including deprecated field spellings
//! - **Mapping** TLS, identity provider, authorization and datastore settings
//! - **Reconciling** encryption providers with the keys that reference them
//! - **Normalizing** provider client keys to PKCS#8 PEM
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Synthesis (field mapping, datastore, encryption, key material)
//! - [`properties`] - Input document model and decoding
//! - [`config`] - Output document model, constants and defaults
//! - [`domain`] - Errors, identifiers and provider types
//! - [`logging`] - Structured logging to stderr
//!
//! ## Quick Start
//!
//! ```rust
//! use credhub_configurator::core::{render, synthesize, SynthesisOptions};
//! use credhub_configurator::properties::parse_properties;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let properties = parse_properties(r#"{
//!     "port": 8844,
//!     "bootstrap": true,
//!     "data_storage": {"type": "postgres", "host": "db", "port": 5432,
//!                      "database": "credhub", "require_tls": true}
//! }"#)?;
//!
//! let config = synthesize(&properties, &SynthesisOptions::default())?;
//! assert!(config.spring.flyway.enabled);
//! assert!(config.spring.datasource.url.ends_with("&ssl=true"));
//!
//! println!("{}", render(&config)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every fatal condition is a [`domain::ConfiguratorError`]. Nothing is written
//! to stdout unless synthesis succeeds, and the binary maps each error to its
//! own exit code.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod properties;
