//! User store configuration.

use std::env;

use common::DatabaseConfig;

/// User store configuration.
#[derive(Debug, Clone, Default)]
pub struct UserStoreConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserStoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first when present. Unset or unparsable values fall back
    /// to the `DatabaseConfig` defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: lookup("USER_STORE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: lookup("USER_STORE_DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: lookup("USER_STORE_DB_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
                sqlx_logging: lookup("USER_STORE_DB_LOG_STATEMENTS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.sqlx_logging),
            },
        }
    }
}
