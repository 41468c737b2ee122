//! Domain error types
//!
//! This module defines the error hierarchy for the configurator. Every fatal
//! condition of a synthesis run is one variant of [`ConfiguratorError`]; the
//! binary is the only place that turns these into process exit codes.

use thiserror::Error;

/// Main configurator error type
///
/// Each variant aborts the whole synthesis. There is no partial output.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    /// No property document was supplied on the input stream
    #[error("Usage: <json> | credhub-configurator")]
    Usage,

    /// Malformed property document, or a port that is not an integer
    #[error("Failed to decode properties: {0}")]
    Decode(String),

    /// Datastore type outside of mysql, postgres and in-memory
    #[error("credhub.data_storage.type must be set to \"mysql\", \"postgres\", or \"in-memory\".")]
    UnsupportedDatastoreType(String),

    /// A resolved key does not satisfy its provider type's requirement
    #[error("{0}")]
    ProviderKeyValidation(String),

    /// A provider's client private key could not be normalized
    #[error(transparent)]
    KeyFormat(#[from] KeyFormatError),

    /// Invalid setting of the tool itself, such as an unknown log level
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors on the input or output stream
    #[error("I/O error: {0}")]
    Io(String),

    /// The generated configuration could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConfiguratorError {
    /// Process exit code for this error
    ///
    /// `0` is reserved for success and `1` for the usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfiguratorError::Usage | ConfiguratorError::Configuration(_) => 1,
            ConfiguratorError::Decode(_) => 2,
            ConfiguratorError::UnsupportedDatastoreType(_) => 3,
            ConfiguratorError::ProviderKeyValidation(_) => 4,
            ConfiguratorError::KeyFormat(_) => 5,
            ConfiguratorError::Io(_) | ConfiguratorError::Serialization(_) => 6,
        }
    }
}

/// Client private key errors
///
/// Both variants name the provider that carried the offending key.
#[derive(Debug, Error)]
pub enum KeyFormatError {
    /// The key text holds no PEM block
    #[error("Provider client private key must be PEM encoded for provider: {provider}")]
    NotPem { provider: String },

    /// The PEM payload is neither PKCS#8 nor PKCS#1
    #[error("Provider client private key is not in PKCS1 or PKCS8 format: [{provider}, {reason}]")]
    UnsupportedFormat { provider: String, reason: String },
}

impl From<std::io::Error> for ConfiguratorError {
    fn from(err: std::io::Error) -> Self {
        ConfiguratorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfiguratorError {
    fn from(err: serde_json::Error) -> Self {
        ConfiguratorError::Decode(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfiguratorError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfiguratorError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_datastore_message_names_valid_types() {
        let err = ConfiguratorError::UnsupportedDatastoreType("oracle".to_string());
        assert_eq!(
            err.to_string(),
            r#"credhub.data_storage.type must be set to "mysql", "postgres", or "in-memory"."#
        );
    }

    #[test]
    fn test_key_format_messages_name_provider() {
        let err = KeyFormatError::NotPem {
            provider: "foo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Provider client private key must be PEM encoded for provider: foo"
        );

        let err = KeyFormatError::UnsupportedFormat {
            provider: "foo".to_string(),
            reason: "bad asn1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Provider client private key is not in PKCS1 or PKCS8 format: [foo, bad asn1]"
        );
    }

    #[test]
    fn test_key_format_error_conversion_is_transparent() {
        let err: ConfiguratorError = KeyFormatError::NotPem {
            provider: "hsm-1".to_string(),
        }
        .into();
        assert!(matches!(err, ConfiguratorError::KeyFormat(_)));
        assert!(err.to_string().ends_with("provider: hsm-1"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ConfiguratorError::Usage.exit_code(), 1);
        assert_eq!(ConfiguratorError::Configuration(String::new()).exit_code(), 1);
        assert_eq!(ConfiguratorError::Decode(String::new()).exit_code(), 2);
        assert_eq!(
            ConfiguratorError::UnsupportedDatastoreType(String::new()).exit_code(),
            3
        );
        assert_eq!(
            ConfiguratorError::ProviderKeyValidation(String::new()).exit_code(),
            4
        );
        assert_ne!(ConfiguratorError::Io(String::new()).exit_code(), 0);
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ConfiguratorError = json_err.into();
        assert!(matches!(err, ConfiguratorError::Decode(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ConfiguratorError = io_err.into();
        assert!(matches!(err, ConfiguratorError::Io(_)));
    }
}
