//! Encryption provider types and their key requirements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of backend an encryption provider talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderType {
    /// Software keys derived from an encryption password
    Internal,
    /// Hardware security module
    Hsm,
    /// External encryption service
    External,
    /// Key management service reached through a plugin socket
    KmsPlugin,
}

/// The key field a provider type cannot do without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredKeyField {
    EncryptionPassword,
    EncryptionKeyName,
}

impl RequiredKeyField {
    /// Property name as it appears in the deployment manifest
    pub fn property_name(self) -> &'static str {
        match self {
            RequiredKeyField::EncryptionPassword => "encryption_password",
            RequiredKeyField::EncryptionKeyName => "encryption_key_name",
        }
    }
}

impl ProviderType {
    /// Manifest spelling of the type
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderType::Internal => "internal",
            ProviderType::Hsm => "hsm",
            ProviderType::External => "external",
            ProviderType::KmsPlugin => "kms-plugin",
        }
    }

    /// Which key field every key of this provider must carry
    pub fn required_key_field(self) -> RequiredKeyField {
        match self {
            ProviderType::Internal => RequiredKeyField::EncryptionPassword,
            ProviderType::Hsm | ProviderType::External | ProviderType::KmsPlugin => {
                RequiredKeyField::EncryptionKeyName
            }
        }
    }

    /// Message reported when a key lacks [`Self::required_key_field`]
    ///
    /// ```
    /// use credhub_configurator::domain::ProviderType;
    ///
    /// assert_eq!(
    ///     ProviderType::Internal.requirement_message(),
    ///     "Internal providers require encryption_password."
    /// );
    /// ```
    pub fn requirement_message(self) -> String {
        let label = match self {
            ProviderType::Internal => "Internal",
            ProviderType::Hsm => "Hsm",
            ProviderType::External => "External",
            ProviderType::KmsPlugin => self.as_str(),
        };
        format!(
            "{label} providers require {}.",
            self.required_key_field().property_name()
        )
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
