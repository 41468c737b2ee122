//! Fixed values of the generated configuration
//!
//! Everything here is a well-known path, placeholder or protocol string that
//! the job's pre-start scripts and the credential service agree on. The
//! placeholders are replaced by the provisioning scripts before the service
//! starts; the configurator only writes them.

use super::schema::{
    AuthServerConfig, CredhubConfig, EncryptionConfig, HibernateConfig, JpaConfig,
    LoggingFileConfig, SecurityConfig, ServerConfig, SpringConfig, SslConfig,
};

pub const CONFIG_PATH: &str = "/var/vcap/jobs/credhub/config";

pub const KEY_STORE_PATH: &str = "/var/vcap/jobs/credhub/config/cacerts.jks";
pub const KEY_STORE_PASSWORD_PLACEHOLDER: &str = "KEY_STORE_PASSWORD_PLACEHOLDER";
pub const KEY_ALIAS: &str = "credhub_tls_cert";

pub const DEFAULT_TRUST_STORE_PATH: &str = "/var/vcap/jobs/credhub/config/trust_store.jks";
pub const TRUST_STORE_PASSWORD_PLACEHOLDER: &str = "TRUST_STORE_PASSWORD_PLACEHOLDER";

pub const MTLS_TRUST_STORE_PATH: &str = "/var/vcap/jobs/credhub/config/mtls_trust_store.jks";
pub const MTLS_TRUST_STORE_PASSWORD_PLACEHOLDER: &str = "MTLS_TRUST_STORE_PASSWORD_PLACEHOLDER";
pub const MTLS_TRUST_STORE_TYPE: &str = "JKS";
pub const MTLS_CLIENT_AUTH: &str = "want";

pub const LOG_CONFIG_PATH: &str = "/var/vcap/jobs/credhub/config/log4j2.properties";

pub const TLS_PROTOCOL_FLOOR: &str = "TLSv1.2";
pub const SCHEMA_MODE_VALIDATE: &str = "validate";

pub const DEFAULT_CIPHER_SUITES: &str = "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256, \
TLS_DHE_RSA_WITH_AES_256_GCM_SHA384, \
TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, \
TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384";

/// Default suites plus the two CBC suites older (Java 7) clients need
pub const LEGACY_CIPHER_SUITES: &str = "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256, \
TLS_DHE_RSA_WITH_AES_256_GCM_SHA384, \
TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, \
TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384, \
TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA, \
TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA";

pub const COMMON_MIGRATIONS: &[&str] = &["classpath:/db/migration/common"];
pub const H2_MIGRATIONS: &str = "classpath:/db/migration/h2";
pub const MYSQL_MIGRATIONS: &str = "classpath:/db/migration/mysql";
pub const POSTGRES_MIGRATIONS: &str = "classpath:/db/migration/postgres";

/// JDBC schemes; the URL is `<scheme>://<host>:<port>/<database>` followed by
/// [`JDBC_BASE_PARAMS`]
pub const MYSQL_JDBC_SCHEME: &str = "jdbc:mariadb";
pub const POSTGRES_JDBC_SCHEME: &str = "jdbc:postgresql";
pub const JDBC_BASE_PARAMS: &str = "?autoReconnect=true";

pub const MYSQL_TLS_PARAMS: &str = "&useSSL=true&requireSSL=true&verifyServerCertificate=true\
&enabledSslProtocolSuites=TLSv1,TLSv1.1,TLSv1.2\
&trustCertificateKeyStorePassword=TRUST_STORE_PASSWORD_PLACEHOLDER\
&trustCertificateKeyStoreUrl=/var/vcap/jobs/credhub/config/trust_store.jks";
pub const MYSQL_DISABLE_HOSTNAME_VERIFICATION: &str = "&disableSslHostnameVerification=true";

pub const POSTGRES_TLS_PARAMS: &str = "&ssl=true";

impl Default for SslConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            key_store: KEY_STORE_PATH.to_string(),
            key_password: KEY_STORE_PASSWORD_PLACEHOLDER.to_string(),
            key_alias: KEY_ALIAS.to_string(),
            ciphers: DEFAULT_CIPHER_SUITES.to_string(),
            enabled_protocols: TLS_PROTOCOL_FLOOR.to_string(),
            client_auth: None,
            trust_store: None,
            trust_store_password: None,
            trust_store_type: None,
        }
    }
}

/// Baseline configuration: TLS on, validate-only schema handling, no datastore
impl Default for CredhubConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 0,
                ssl: SslConfig::default(),
            },
            security: SecurityConfig::default(),
            auth_server: AuthServerConfig::default(),
            spring: SpringConfig {
                jpa: JpaConfig {
                    hibernate: HibernateConfig {
                        ddl_auto: SCHEMA_MODE_VALIDATE.to_string(),
                    },
                },
                ..SpringConfig::default()
            },
            encryption: EncryptionConfig::default(),
            logging: LoggingFileConfig {
                config: LOG_CONFIG_PATH.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_tls() {
        let config = CredhubConfig::default();
        assert!(config.server.ssl.enabled);
        assert_eq!(config.server.ssl.ciphers, DEFAULT_CIPHER_SUITES);
        assert_eq!(config.server.ssl.enabled_protocols, "TLSv1.2");
        assert_eq!(
            config.server.ssl.key_store,
            "/var/vcap/jobs/credhub/config/cacerts.jks"
        );
        assert!(config.server.ssl.client_auth.is_none());
    }

    #[test]
    fn test_default_config_validates_schema_only() {
        let config = CredhubConfig::default();
        assert_eq!(config.spring.jpa.hibernate.ddl_auto, "validate");
        assert!(!config.spring.flyway.enabled);
        assert!(!config.encryption.key_creation_enabled);
        assert!(config.encryption.providers.is_empty());
    }

    #[test]
    fn test_default_config_is_deterministic() {
        let first = serde_yaml::to_string(&CredhubConfig::default()).unwrap();
        let second = serde_yaml::to_string(&CredhubConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_legacy_ciphers_extend_defaults() {
        assert!(LEGACY_CIPHER_SUITES.starts_with(DEFAULT_CIPHER_SUITES));
        assert!(LEGACY_CIPHER_SUITES.ends_with(
            "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA, TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA"
        ));
    }

    #[test]
    fn test_paths_live_under_config_dir() {
        for path in [
            KEY_STORE_PATH,
            DEFAULT_TRUST_STORE_PATH,
            MTLS_TRUST_STORE_PATH,
            LOG_CONFIG_PATH,
        ] {
            assert!(path.starts_with(CONFIG_PATH), "{path}");
        }
        assert!(MYSQL_TLS_PARAMS.ends_with(DEFAULT_TRUST_STORE_PATH));
    }
}
