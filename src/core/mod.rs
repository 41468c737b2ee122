//! Configuration synthesis.
//!
//! This module turns a decoded property document into the credential
//! service's application configuration.
//!
//! # Modules
//!
//! - [`mapper`] - TLS, identity provider, authorization and bootstrap settings
//! - [`datastore`] - migration locations and the JDBC connection URL
//! - [`encryption`] - joins providers and keys, validates keys per provider type
//! - [`key_material`] - re-encodes provider client keys as PKCS#8 PEM
//!
//! # Synthesis Workflow
//!
//! 1. **Baseline**: start from `CredhubConfig::default()`
//! 2. **Map Fields**: copy and derive the scalar and conditional settings
//! 3. **Reconcile Encryption**: build the provider list with resolved keys
//! 4. **Render**: serialize the result as YAML
//!
//! Any failure aborts the run before anything is rendered.
//!
//! # Example
//!
//! ```rust
//! use credhub_configurator::core::{render, synthesize, SynthesisOptions};
//! use credhub_configurator::properties::parse_properties;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let properties = parse_properties(r#"{
//!     "port": 8844,
//!     "data_storage": {"type": "in-memory"},
//!     "encryption": {
//!         "providers": [{"name": "main", "type": "internal"}],
//!         "keys": [{"provider_name": "main", "active": true,
//!                   "key_properties": {"encryption_password": "a-long-password"}}]
//!     }
//! }"#)?;
//!
//! let config = synthesize(&properties, &SynthesisOptions::default())?;
//! let yaml = render(&config)?;
//! assert!(yaml.contains("provider_name: main"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod datastore;
pub mod encryption;
pub mod key_material;
pub mod mapper;

pub use encryption::KeyFallbackPolicy;

use crate::config::CredhubConfig;
use crate::domain::Result;
use crate::properties::PropertyDocument;

/// Settings that change how a document is synthesized
#[derive(Debug, Clone, Default)]
pub struct SynthesisOptions {
    /// Precedence between `key_properties` and the deprecated flat key fields
    pub key_fallback: KeyFallbackPolicy,
}

/// Builds the complete application configuration from a property document
///
/// # Errors
///
/// Returns the first decode, datastore, key validation or key format error
/// encountered.
pub fn synthesize(
    properties: &PropertyDocument,
    options: &SynthesisOptions,
) -> Result<CredhubConfig> {
    let mut config = mapper::map_fields(properties, CredhubConfig::default())?;
    config.encryption.providers =
        encryption::reconcile(&properties.encryption, options.key_fallback)?;

    tracing::info!(
        port = config.server.port,
        providers = config.encryption.providers.len(),
        bootstrap = properties.bootstrap,
        "Synthesized application configuration"
    );

    Ok(config)
}

/// Serializes the configuration as a YAML document
pub fn render(config: &CredhubConfig) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfiguratorError;
    use crate::properties::parse_properties;

    #[test]
    fn test_synthesis_fails_without_partial_output() {
        let properties = parse_properties(
            r#"{
                "port": 8844,
                "data_storage": {"type": "in-memory"},
                "encryption": {
                    "providers": [{"name": "int", "type": "internal"}],
                    "keys": [{
                        "provider_name": "int",
                        "key_properties": {"encryption_key_name": "k"}
                    }]
                }
            }"#,
        )
        .unwrap();

        let err = synthesize(&properties, &SynthesisOptions::default()).unwrap_err();
        assert!(matches!(err, ConfiguratorError::ProviderKeyValidation(_)));
    }

    #[test]
    fn test_options_select_key_fallback() {
        let properties = parse_properties(
            r#"{
                "port": 8844,
                "data_storage": {"type": "in-memory"},
                "encryption": {
                    "providers": [{"name": "int", "type": "internal"}],
                    "keys": [{"provider_name": "int", "encryption_password": "legacy-password",
                              "key_properties": {"encryption_key_name": "k"}}]
                }
            }"#,
        )
        .unwrap();

        assert!(synthesize(&properties, &SynthesisOptions::default()).is_err());

        let options = SynthesisOptions {
            key_fallback: KeyFallbackPolicy::PerField,
        };
        let config = synthesize(&properties, &options).unwrap();
        assert_eq!(config.encryption.providers[0].keys.len(), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let properties =
            parse_properties(r#"{"port": 8844, "data_storage": {"type": "in-memory"}}"#).unwrap();
        let config = synthesize(&properties, &SynthesisOptions::default()).unwrap();
        assert_eq!(render(&config).unwrap(), render(&config).unwrap());
    }

    #[test]
    fn test_render_top_level_sections() {
        let properties =
            parse_properties(r#"{"port": 8844, "data_storage": {"type": "in-memory"}}"#).unwrap();
        let yaml = render(&synthesize(&properties, &SynthesisOptions::default()).unwrap()).unwrap();
        let sections = [
            "server:",
            "security:",
            "auth_server:",
            "spring:",
            "encryption:",
            "logging:",
        ];
        for section in sections {
            assert!(yaml.contains(section), "missing {section}");
        }
    }
}
