//! Field mapping from the property document onto the baseline configuration

use super::datastore::apply_datastore;
use crate::config::defaults::{
    DEFAULT_TRUST_STORE_PATH, LEGACY_CIPHER_SUITES, MTLS_CLIENT_AUTH,
    MTLS_TRUST_STORE_PASSWORD_PLACEHOLDER, MTLS_TRUST_STORE_PATH, MTLS_TRUST_STORE_TYPE,
    TRUST_STORE_PASSWORD_PLACEHOLDER,
};
use crate::config::{CredhubConfig, Permission};
use crate::domain::Result;
use crate::properties::PropertyDocument;

/// Copies and derives every non-encryption setting onto `config`
///
/// # Errors
///
/// - [`ConfiguratorError::Decode`] if `port` is not an integer
/// - [`ConfiguratorError::UnsupportedDatastoreType`] for an unknown datastore
///   type
///
/// [`ConfiguratorError::Decode`]: crate::domain::ConfiguratorError::Decode
/// [`ConfiguratorError::UnsupportedDatastoreType`]:
///     crate::domain::ConfiguratorError::UnsupportedDatastoreType
pub fn map_fields(
    properties: &PropertyDocument,
    mut config: CredhubConfig,
) -> Result<CredhubConfig> {
    config.server.port = properties.port.to_i64("port")?;

    let ssl = &mut config.server.ssl;
    if properties.java7_tls_ciphers_enabled {
        ssl.ciphers = LEGACY_CIPHER_SUITES.to_string();
    }

    if !properties.authentication.mutual_tls.trusted_cas.is_empty() {
        ssl.client_auth = Some(MTLS_CLIENT_AUTH.to_string());
        ssl.trust_store = Some(MTLS_TRUST_STORE_PATH.to_string());
        ssl.trust_store_password = Some(MTLS_TRUST_STORE_PASSWORD_PLACEHOLDER.to_string());
        ssl.trust_store_type = Some(MTLS_TRUST_STORE_TYPE.to_string());
    }

    let uaa = &properties.authentication.uaa;
    if uaa.enabled {
        config.security.oauth2.enabled = true;
        config.auth_server.url = uaa.url.clone();
        config.auth_server.internal_url = uaa.internal_url.clone();
        config.auth_server.trust_store = DEFAULT_TRUST_STORE_PATH.to_string();
        config.auth_server.trust_store_password = TRUST_STORE_PASSWORD_PLACEHOLDER.to_string();
    }

    let authorization = &properties.authorization;
    config.security.authorization.acls.enabled = authorization.acls.enabled;
    config.security.authorization.permissions = authorization
        .permissions
        .iter()
        .map(|p| Permission {
            path: p.path.clone(),
            actors: p.actors.clone(),
            operations: p.operations.clone(),
        })
        .collect();

    if properties.bootstrap {
        config.encryption.key_creation_enabled = true;
        config.spring.flyway.enabled = true;
    }

    apply_datastore(&properties.data_storage, &mut config.spring)?;

    Ok(config)
}
