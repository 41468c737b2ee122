//! Generated application configuration.
//!
//! This module owns the *output* side of the configurator: the document the
//! credential service reads at startup.
//!
//! # Overview
//!
//! - [`schema`] - the typed shape of the generated document ([`CredhubConfig`])
//! - [`defaults`] - fixed paths, placeholders, cipher lists, migration
//!   locations and connection URL templates, plus the baseline built by
//!   `CredhubConfig::default()`
//! - [`secret`] - [`SecretString`] for passwords and key material
//!
//! # Quick Start
//!
//! ```rust
//! use credhub_configurator::config::CredhubConfig;
//!
//! let baseline = CredhubConfig::default();
//! assert!(baseline.server.ssl.enabled);
//! assert_eq!(baseline.spring.jpa.hibernate.ddl_auto, "validate");
//! ```

pub mod defaults;
pub mod schema;
pub mod secret;

pub use schema::{
    AuthServerConfig, ConnectionConfig, CredhubConfig, DatasourceConfig, FlywayConfig,
    KeyConfig, Permission, ProviderConfig, SslConfig,
};
pub use secret::{non_empty_secret, secret_string, SecretString, SecretValue};
