use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};
use sea_orm::ConnectOptions;
use std::time::Duration;

/// Default location of the shop database, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.sqlite3?mode=rwc";

/// SQLite database configuration
///
/// Holds the connection URL and pool settings. Can be constructed manually or
/// loaded from environment variables.
///
/// # Example
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
/// use core_config::FromEnv;
///
/// let config = SqliteConfig::from_env()?;
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqliteConfig {
    /// Database connection URL (`sqlite://path?mode=rwc` or `sqlite::memory:`)
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    /// Create a new SqliteConfig with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            sqlx_logging: false,
            ..Self::default()
        }
    }

    /// Whether the URL points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Convert this config into SeaORM ConnectOptions
    ///
    /// An in-memory database lives only as long as its connection, so the pool
    /// is pinned to exactly one connection that never idles out.
    pub fn into_connect_options(self) -> ConnectOptions {
        let (max, min) = if self.is_in_memory() {
            (1, 1)
        } else {
            (self.max_connections, self.min_connections.min(self.max_connections))
        };

        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(max)
            .min_connections(min)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    /// Get a reference to the database URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

impl FromEnv for SqliteConfig {
    /// Reads:
    /// - `DATABASE_URL` (default `sqlite://database.sqlite3?mode=rwc`)
    /// - `DB_MAX_CONNECTIONS` (default 5)
    /// - `DB_MIN_CONNECTIONS` (default 1)
    /// - `DB_CONNECT_TIMEOUT` seconds (default 8)
    /// - `DB_ACQUIRE_TIMEOUT` seconds (default 8)
    /// - `DB_SQLX_LOGGING` (default false)
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let max_connections = env_parse_or("DB_MAX_CONNECTIONS", defaults.max_connections)?;

        if max_connections == 0 {
            return Err(ConfigError::ParseError {
                key: "DB_MAX_CONNECTIONS".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections,
            min_connections: env_parse_or("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_secs: env_parse_or("DB_CONNECT_TIMEOUT", defaults.connect_timeout_secs)?,
            acquire_timeout_secs: env_parse_or("DB_ACQUIRE_TIMEOUT", defaults.acquire_timeout_secs)?,
            sqlx_logging: env_parse_or("DB_SQLX_LOGGING", defaults.sqlx_logging)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "DATABASE_URL",
        "DB_MAX_CONNECTIONS",
        "DB_MIN_CONNECTIONS",
        "DB_CONNECT_TIMEOUT",
        "DB_ACQUIRE_TIMEOUT",
        "DB_SQLX_LOGGING",
    ];

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = SqliteConfig::from_env().unwrap();
            assert_eq!(config, SqliteConfig::default());
            assert_eq!(config.url(), DEFAULT_DATABASE_URL);
            assert!(!config.is_in_memory());
        });
    }

    #[test]
    fn test_from_env_custom_values() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite:///var/lib/shop/shop.db?mode=rwc")),
                ("DB_MAX_CONNECTIONS", Some("10")),
                ("DB_SQLX_LOGGING", Some("true")),
            ],
            || {
                let config = SqliteConfig::from_env().unwrap();
                assert_eq!(config.url, "sqlite:///var/lib/shop/shop.db?mode=rwc");
                assert_eq!(config.max_connections, 10);
                assert!(config.sqlx_logging);
            },
        );
    }

    #[test]
    fn test_from_env_rejects_bad_numbers() {
        temp_env::with_var("DB_MAX_CONNECTIONS", Some("many"), || {
            let err = SqliteConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
        });

        temp_env::with_var("DB_MAX_CONNECTIONS", Some("0"), || {
            assert!(SqliteConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(SqliteConfig::in_memory().is_in_memory());
        assert!(SqliteConfig::new("sqlite:file:shop?mode=memory&cache=shared").is_in_memory());
        assert!(!SqliteConfig::new("sqlite://shop.db").is_in_memory());
    }

    #[test]
    fn test_in_memory_pool_is_pinned_to_one_connection() {
        let mut config = SqliteConfig::new("sqlite::memory:");
        config.max_connections = 10;
        let options = config.into_connect_options();
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
    }
}
