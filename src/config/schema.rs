//! Application configuration schema
//!
//! These types are the generated document. Field names follow the keys the
//! credential service reads from its `application.yml`; optional fields are
//! left out of the rendered YAML when empty.

use crate::config::SecretString;
use crate::domain::{ProviderName, ProviderType};
use serde::{Deserialize, Serialize};

/// Root of the generated application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredhubConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub auth_server: AuthServerConfig,
    pub spring: SpringConfig,
    pub encryption: EncryptionConfig,
    pub logging: LoggingFileConfig,
}

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: i64,
    pub ssl: SslConfig,
}

/// TLS settings of the listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslConfig {
    pub enabled: bool,
    pub key_store: String,
    pub key_password: String,
    pub key_alias: String,
    pub ciphers: String,
    pub enabled_protocols: String,

    /// `want` when mutual TLS trusted CAs are configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_auth: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_store: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_store_password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_store_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub oauth2: OAuth2Config,
    pub authorization: AuthorizationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuth2Config {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorizationConfig {
    pub acls: AclsConfig,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AclsConfig {
    pub enabled: bool,
}

/// A single access rule: which actors may perform which operations on a path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub path: String,
    pub actors: Vec<String>,
    pub operations: Vec<String>,
}

/// Identity provider (UAA) integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthServerConfig {
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub internal_url: String,

    pub trust_store: String,
    pub trust_store_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpringConfig {
    pub jpa: JpaConfig,
    pub datasource: DatasourceConfig,
    pub flyway: FlywayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JpaConfig {
    pub hibernate: HibernateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HibernateConfig {
    /// `validate`: the service checks the schema but never rewrites it
    pub ddl_auto: String,
}

/// Datastore connection
///
/// Empty for the in-memory datastore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasourceConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretString>,

    #[serde(default)]
    pub url: String,
}

/// Schema migrations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlywayConfig {
    pub locations: Vec<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptionConfig {
    pub key_creation_enabled: bool,
    pub providers: Vec<ProviderConfig>,
}

/// An encryption provider with the keys that reference it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider_name: ProviderName,
    pub provider_type: ProviderType,
    pub keys: Vec<KeyConfig>,

    #[serde(default, skip_serializing_if = "ConnectionConfig::is_empty")]
    pub configuration: ConnectionConfig,
}

/// A resolved encryption key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_password: Option<SecretString>,

    #[serde(default)]
    pub active: bool,
}

/// How the service reaches a provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_password: Option<SecretString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_ca: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,

    /// Always canonical PKCS#8 PEM once synthesis has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<SecretString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ConnectionConfig {
    /// True when no connection property is set
    pub fn is_empty(&self) -> bool {
        self.partition.is_none()
            && self.partition_password.is_none()
            && self.host.is_none()
            && self.port.is_none()
            && self.server_ca.is_none()
            && self.client_certificate.is_none()
            && self.client_key.is_none()
            && self.endpoint.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingFileConfig {
    /// Path of the service's own log configuration file
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_empty_connection_config_is_omitted() {
        let provider = ProviderConfig {
            provider_name: ProviderName::from("int"),
            provider_type: ProviderType::Internal,
            keys: vec![KeyConfig {
                encryption_key_name: None,
                encryption_password: Some(secret_string("some-password")),
                active: true,
            }],
            configuration: ConnectionConfig::default(),
        };

        let yaml = serde_yaml::to_string(&provider).unwrap();
        assert!(!yaml.contains("configuration"));
        assert!(!yaml.contains("encryption_key_name"));
        assert!(yaml.contains("encryption_password: some-password"));
        assert!(yaml.contains("active: true"));
    }

    #[test]
    fn test_connection_config_is_empty() {
        let mut connection = ConnectionConfig::default();
        assert!(connection.is_empty());

        connection.endpoint = Some("unix:///var/vcap/sys/run/kms.sock".to_string());
        assert!(!connection.is_empty());
    }

    #[test]
    fn test_ssl_optional_fields_omitted() {
        let ssl = SslConfig {
            enabled: true,
            key_store: "ks".to_string(),
            key_password: "kp".to_string(),
            key_alias: "alias".to_string(),
            ciphers: "c".to_string(),
            enabled_protocols: "TLSv1.2".to_string(),
            client_auth: None,
            trust_store: None,
            trust_store_password: None,
            trust_store_type: None,
        };

        let yaml = serde_yaml::to_string(&ssl).unwrap();
        assert!(!yaml.contains("client_auth"));
        assert!(!yaml.contains("trust_store"));
    }
}
