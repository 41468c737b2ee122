//! Datastore connection assembly
//!
//! Picks the schema migration locations for the configured datastore and, for
//! the networked datastores, builds the JDBC connection URL.

use crate::config::defaults::{
    COMMON_MIGRATIONS, H2_MIGRATIONS, JDBC_BASE_PARAMS, MYSQL_DISABLE_HOSTNAME_VERIFICATION,
    MYSQL_JDBC_SCHEME, MYSQL_MIGRATIONS, MYSQL_TLS_PARAMS, POSTGRES_JDBC_SCHEME,
    POSTGRES_MIGRATIONS, POSTGRES_TLS_PARAMS,
};
use crate::config::schema::SpringConfig;
use crate::domain::{ConfiguratorError, Result};
use crate::properties::DataStorageProperties;
use std::str::FromStr;

/// Supported datastores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatastoreType {
    InMemory,
    Mysql,
    Postgres,
}

impl FromStr for DatastoreType {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in-memory" => Ok(Self::InMemory),
            "mysql" => Ok(Self::Mysql),
            "postgres" => Ok(Self::Postgres),
            other => Err(ConfiguratorError::UnsupportedDatastoreType(other.to_string())),
        }
    }
}

impl DatastoreType {
    /// Migration locations: the common set first, then the datastore's own
    pub fn migration_locations(self) -> Vec<String> {
        let specific = match self {
            DatastoreType::InMemory => H2_MIGRATIONS,
            DatastoreType::Mysql => MYSQL_MIGRATIONS,
            DatastoreType::Postgres => POSTGRES_MIGRATIONS,
        };
        COMMON_MIGRATIONS
            .iter()
            .copied()
            .chain(std::iter::once(specific))
            .map(String::from)
            .collect()
    }

    /// JDBC URL for the datastore, or `None` for in-memory
    ///
    /// Host, port and database are inserted verbatim.
    pub fn connection_url(self, storage: &DataStorageProperties) -> Option<String> {
        let (scheme, tls_params) = match self {
            DatastoreType::InMemory => return None,
            DatastoreType::Mysql => (MYSQL_JDBC_SCHEME, MYSQL_TLS_PARAMS),
            DatastoreType::Postgres => (POSTGRES_JDBC_SCHEME, POSTGRES_TLS_PARAMS),
        };

        let port = storage
            .port
            .as_ref()
            .map(|p| p.as_text())
            .unwrap_or_default();
        let mut url = format!(
            "{scheme}://{host}:{port}/{database}{JDBC_BASE_PARAMS}",
            host = storage.host,
            database = storage.database,
        );

        if storage.require_tls {
            url.push_str(tls_params);
            if self == DatastoreType::Mysql && storage.hostname_verification.enabled == Some(false)
            {
                url.push_str(MYSQL_DISABLE_HOSTNAME_VERIFICATION);
            }
        }

        Some(url)
    }
}

/// Fills the datasource and migration settings from the datastore properties
///
/// # Errors
///
/// Returns [`ConfiguratorError::UnsupportedDatastoreType`] when the type is
/// not one of `mysql`, `postgres` or `in-memory`.
pub fn apply_datastore(storage: &DataStorageProperties, spring: &mut SpringConfig) -> Result<()> {
    let datastore: DatastoreType = storage.kind.parse()?;

    spring.flyway.locations = datastore.migration_locations();

    if let Some(url) = datastore.connection_url(storage) {
        spring.datasource.url = url;
        spring.datasource.username = storage.username.clone();
        spring.datasource.password = storage.password.clone();
    }

    tracing::debug!(
        datastore = %storage.kind,
        require_tls = storage.require_tls,
        "Configured datastore"
    );

    Ok(())
}
