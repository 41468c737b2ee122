//! Domain types shared by every layer of the configurator.
//!
//! # Overview
//!
//! - **Error types** ([`ConfiguratorError`], [`KeyFormatError`])
//! - **Result type alias** ([`Result`])
//! - **Identifiers** ([`ProviderName`])
//! - **Provider types** ([`ProviderType`]) and the key field each one requires
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]. Components propagate errors
//! with `?` and never terminate the process themselves:
//!
//! ```rust
//! use credhub_configurator::domain::{ConfiguratorError, Result};
//!
//! fn check_type(datastore: &str) -> Result<()> {
//!     match datastore {
//!         "mysql" | "postgres" | "in-memory" => Ok(()),
//!         other => Err(ConfiguratorError::UnsupportedDatastoreType(other.to_string())),
//!     }
//! }
//!
//! assert!(check_type("oracle").is_err());
//! ```

pub mod errors;
pub mod ids;
pub mod provider;
pub mod result;

pub use errors::{ConfiguratorError, KeyFormatError};
pub use ids::ProviderName;
pub use provider::{ProviderType, RequiredKeyField};
pub use result::Result;
