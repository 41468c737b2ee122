//! Property document schema
//!
//! The deployment orchestrator hands the job's properties over as one JSON
//! document. Field names follow the manifest; unknown fields are ignored and
//! every field except `port` may be omitted.

use crate::config::SecretString;
use crate::domain::{ConfiguratorError, ProviderName, ProviderType, Result};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root of the property document
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDocument {
    /// Listener port; must be an integer
    pub port: NumericValue,

    /// Append the CBC cipher suites older clients need
    #[serde(default)]
    pub java7_tls_ciphers_enabled: bool,

    #[serde(default)]
    pub authentication: AuthenticationProperties,

    #[serde(default)]
    pub authorization: AuthorizationProperties,

    #[serde(default)]
    pub data_storage: DataStorageProperties,

    #[serde(default)]
    pub encryption: EncryptionProperties,

    /// Set on the one instance that creates keys and migrates the schema
    #[serde(default)]
    pub bootstrap: bool,
}

/// A number that may arrive either as a JSON number or as a string of digits
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(serde_json::Number),
    Text(String),
}

impl NumericValue {
    /// Textual form, as substituted into connection URLs
    pub fn as_text(&self) -> String {
        match self {
            NumericValue::Number(n) => n.to_string(),
            NumericValue::Text(s) => s.clone(),
        }
    }

    /// Parses the value as an integer
    ///
    /// `field` names the property in the error message.
    pub fn to_i64(&self, field: &str) -> Result<i64> {
        let parsed = match self {
            NumericValue::Number(n) => n.as_i64(),
            NumericValue::Text(s) => s.trim().parse().ok(),
        };
        parsed.ok_or_else(|| {
            ConfiguratorError::Decode(format!(
                "{field} must be an integer, got '{}'",
                self.as_text()
            ))
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthenticationProperties {
    #[serde(default)]
    pub mutual_tls: MutualTlsProperties,

    #[serde(default)]
    pub uaa: UaaProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutualTlsProperties {
    #[serde(default)]
    pub trusted_cas: Vec<String>,
}

/// Identity provider integration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UaaProperties {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub internal_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizationProperties {
    #[serde(default)]
    pub acls: AclsProperties,

    #[serde(default)]
    pub permissions: Vec<PermissionProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AclsProperties {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PermissionProperties {
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub actors: Vec<String>,

    #[serde(default)]
    pub operations: Vec<String>,
}

/// Datastore settings
///
/// `kind` stays a plain string here; it is checked against the supported
/// datastores when the connection is assembled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataStorageProperties {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: Option<NumericValue>,

    #[serde(default)]
    pub database: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: Option<SecretString>,

    #[serde(default)]
    pub require_tls: bool,

    #[serde(default)]
    pub hostname_verification: HostnameVerificationProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostnameVerificationProperties {
    /// `None` when the manifest does not mention hostname verification
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Encryption providers and keys
///
/// Both lists may contain nested lists, which are flattened in order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncryptionProperties {
    #[serde(default, deserialize_with = "deserialize_flattened")]
    pub keys: Vec<Key>,

    #[serde(default, deserialize_with = "deserialize_flattened")]
    pub providers: Vec<Provider>,
}

/// An encryption key entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Key {
    /// Name of the provider this key belongs to
    #[serde(default)]
    pub provider_name: ProviderName,

    #[serde(default)]
    pub active: bool,

    /// Deprecated flat form of `key_properties.encryption_key_name`
    #[serde(default)]
    pub encryption_key_name: Option<String>,

    /// Deprecated flat form of `key_properties.encryption_password`
    #[serde(default)]
    pub encryption_password: Option<SecretString>,

    #[serde(default)]
    pub key_properties: KeyProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyProperties {
    #[serde(default)]
    pub encryption_key_name: Option<String>,

    #[serde(default)]
    pub encryption_password: Option<SecretString>,
}

/// An encryption provider entry
#[derive(Debug, Clone, Deserialize)]
pub struct Provider {
    pub name: ProviderName,

    #[serde(rename = "type")]
    pub provider_type: ProviderType,

    /// Deprecated flat form of `connection_properties.partition`
    #[serde(default)]
    pub partition: Option<String>,

    /// Deprecated flat form of `connection_properties.partition_password`
    #[serde(default)]
    pub partition_password: Option<SecretString>,

    #[serde(default)]
    pub connection_properties: ConnectionProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionProperties {
    #[serde(default)]
    pub partition: Option<String>,

    #[serde(default)]
    pub partition_password: Option<SecretString>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub server_ca: Option<String>,

    #[serde(default)]
    pub client_certificate: Option<String>,

    /// PEM text, PKCS#1 or PKCS#8
    #[serde(default)]
    pub client_key: Option<SecretString>,

    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Returns the string only when it is present and non-empty
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Deserializes a list whose elements may themselves be lists
///
/// `null` is treated as an empty list.
fn deserialize_flattened<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut items = Vec::with_capacity(raw.len());
    flatten_into(raw, &mut items).map_err(D::Error::custom)?;
    Ok(items)
}

fn flatten_into<T: DeserializeOwned>(
    values: Vec<Value>,
    items: &mut Vec<T>,
) -> std::result::Result<(), serde_json::Error> {
    for value in values {
        match value {
            Value::Array(nested) => flatten_into(nested, items)?,
            other => items.push(serde_json::from_value(other)?),
        }
    }
    Ok(())
}
