//! Encryption provider and key reconciliation
//!
//! The property document lists providers and keys separately; a key names its
//! provider through `provider_name`. Reconciliation joins the two lists,
//! resolves each key's effective name and password, enforces the provider
//! type's required field and normalizes provider client keys.
//!
//! Providers are emitted in input order, each with the keys that reference it
//! in input order. The first violation aborts reconciliation.

use super::key_material::normalize_private_key;
use crate::config::{
    non_empty_secret, secret_string, ConnectionConfig, KeyConfig, ProviderConfig, SecretString,
};
use crate::domain::{ConfiguratorError, ProviderType, RequiredKeyField, Result};
use crate::properties::schema::non_empty;
use crate::properties::{EncryptionProperties, Key, Provider};
use secrecy::ExposeSecret;
use std::collections::HashMap;
use std::str::FromStr;

/// Precedence between a key's `key_properties` and its deprecated flat fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyFallbackPolicy {
    /// Use `key_properties`; fall back to both flat fields only when neither
    /// `key_properties` field is set
    #[default]
    BothAbsent,

    /// Resolve each field on its own: `key_properties` first, then the flat field
    PerField,
}

impl KeyFallbackPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyFallbackPolicy::BothAbsent => "both-absent",
            KeyFallbackPolicy::PerField => "per-field",
        }
    }
}

impl FromStr for KeyFallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both-absent" => Ok(Self::BothAbsent),
            "per-field" => Ok(Self::PerField),
            other => Err(format!(
                "Invalid key fallback policy '{other}'. Must be one of: both-absent, per-field"
            )),
        }
    }
}

impl std::fmt::Display for KeyFallbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective name and password of a key
pub fn resolve_key_fields(
    key: &Key,
    policy: KeyFallbackPolicy,
) -> (Option<String>, Option<SecretString>) {
    let structured_name = non_empty(&key.key_properties.encryption_key_name);
    let structured_password = non_empty_secret(&key.key_properties.encryption_password);
    let flat_name = non_empty(&key.encryption_key_name);
    let flat_password = non_empty_secret(&key.encryption_password);

    let (name, password) = match policy {
        KeyFallbackPolicy::BothAbsent => {
            if structured_name.is_none() && structured_password.is_none() {
                (flat_name, flat_password)
            } else {
                (structured_name, structured_password)
            }
        }
        KeyFallbackPolicy::PerField => (
            structured_name.or(flat_name),
            structured_password.or(flat_password),
        ),
    };

    (name.map(str::to_string), password.cloned())
}

/// Effective partition and partition password of a provider
///
/// The `connection_properties` pair wins when both halves are set. Otherwise,
/// for hsm providers only, the deprecated top-level pair is used if either
/// half of it is set. Failing both, the `connection_properties` values are
/// kept as supplied.
pub fn resolve_partition(provider: &Provider) -> (Option<String>, Option<SecretString>) {
    let connection = &provider.connection_properties;
    let connection_partition = non_empty(&connection.partition);
    let connection_password = non_empty_secret(&connection.partition_password);

    if connection_partition.is_some() && connection_password.is_some() {
        return (
            connection_partition.map(str::to_string),
            connection_password.cloned(),
        );
    }

    let legacy_partition = non_empty(&provider.partition);
    let legacy_password = non_empty_secret(&provider.partition_password);
    let has_legacy = legacy_partition.is_some() || legacy_password.is_some();
    if provider.provider_type == ProviderType::Hsm && has_legacy {
        return (
            legacy_partition.map(str::to_string),
            legacy_password.cloned(),
        );
    }

    (
        connection_partition.map(str::to_string),
        connection_password.cloned(),
    )
}

/// Builds the output provider list from the document's providers and keys
///
/// # Errors
///
/// - [`ConfiguratorError::ProviderKeyValidation`] if a key lacks the field its
///   provider type requires
/// - [`ConfiguratorError::KeyFormat`] if a provider client key cannot be
///   normalized
pub fn reconcile(
    encryption: &EncryptionProperties,
    policy: KeyFallbackPolicy,
) -> Result<Vec<ProviderConfig>> {
    let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, provider) in encryption.providers.iter().enumerate() {
        by_name.entry(provider.name.as_str()).or_default().push(index);
    }

    for (name, indices) in &by_name {
        if indices.len() > 1 {
            tracing::warn!(
                provider = %name,
                count = indices.len(),
                "Duplicate provider name; each provider receives the keys naming it"
            );
        }
    }

    let mut assigned: Vec<Vec<&Key>> = vec![Vec::new(); encryption.providers.len()];
    for key in &encryption.keys {
        match by_name.get(key.provider_name.as_str()) {
            Some(indices) => {
                for &index in indices {
                    assigned[index].push(key);
                }
            }
            None => tracing::warn!(
                provider = %key.provider_name,
                active = key.active,
                "Key references an unknown provider and is dropped"
            ),
        }
    }

    encryption
        .providers
        .iter()
        .zip(assigned)
        .map(|(provider, keys)| build_provider(provider, &keys, policy))
        .collect()
}

fn build_provider(
    provider: &Provider,
    keys: &[&Key],
    policy: KeyFallbackPolicy,
) -> Result<ProviderConfig> {
    let keys = keys
        .iter()
        .map(|key| resolve_key(provider.provider_type, key, policy))
        .collect::<Result<Vec<_>>>()?;

    let configuration = build_connection(provider)?;

    tracing::info!(
        provider = %provider.name,
        provider_type = %provider.provider_type,
        keys = keys.len(),
        "Reconciled encryption provider"
    );

    Ok(ProviderConfig {
        provider_name: provider.name.clone(),
        provider_type: provider.provider_type,
        keys,
        configuration,
    })
}

fn resolve_key(
    provider_type: ProviderType,
    key: &Key,
    policy: KeyFallbackPolicy,
) -> Result<KeyConfig> {
    let (encryption_key_name, encryption_password) = resolve_key_fields(key, policy);

    let satisfied = match provider_type.required_key_field() {
        RequiredKeyField::EncryptionPassword => encryption_password.is_some(),
        RequiredKeyField::EncryptionKeyName => encryption_key_name.is_some(),
    };
    if !satisfied {
        return Err(ConfiguratorError::ProviderKeyValidation(
            provider_type.requirement_message(),
        ));
    }

    Ok(KeyConfig {
        encryption_key_name,
        encryption_password,
        active: key.active,
    })
}

fn build_connection(provider: &Provider) -> Result<ConnectionConfig> {
    let connection = &provider.connection_properties;
    let (partition, partition_password) = resolve_partition(provider);

    let client_key = match non_empty_secret(&connection.client_key) {
        Some(raw) => {
            let canonical =
                normalize_private_key(provider.name.as_str(), raw.expose_secret().as_ref())?;
            tracing::debug!(provider = %provider.name, "Normalized client private key");
            Some(secret_string(canonical))
        }
        None => None,
    };

    Ok(ConnectionConfig {
        partition,
        partition_password,
        host: non_empty(&connection.host).map(str::to_string),
        port: connection.port,
        server_ca: non_empty(&connection.server_ca).map(str::to_string),
        client_certificate: non_empty(&connection.client_certificate).map(str::to_string),
        client_key,
        endpoint: non_empty(&connection.endpoint).map(str::to_string),
    })
}
