//! Deployment property document.
//!
//! This module is the *input* side of the configurator: the typed shape of
//! the JSON document the orchestrator renders from the job's manifest
//! properties, and the functions that decode it.
//!
//! # Example Document
//!
//! ```json
//! {
//!   "port": 8844,
//!   "authentication": {"uaa": {"enabled": true, "url": "https://uaa.example.com:8443"}},
//!   "authorization": {"acls": {"enabled": true}, "permissions": []},
//!   "data_storage": {"type": "postgres", "host": "db", "port": 5432, "database": "credhub",
//!                    "username": "admin", "password": "secret", "require_tls": true},
//!   "encryption": {
//!     "providers": [{"name": "main", "type": "internal"}],
//!     "keys": [{"provider_name": "main", "active": true,
//!               "key_properties": {"encryption_password": "a-long-password"}}]
//!   },
//!   "bootstrap": true
//! }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{parse_properties, read_properties};
pub use schema::{
    ConnectionProperties, DataStorageProperties, EncryptionProperties, Key, KeyProperties,
    NumericValue, PropertyDocument, Provider,
};
