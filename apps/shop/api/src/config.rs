use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};

use axum_helpers::JwtConfig;
use database::sqlite::SqliteConfig;
use email::SmtpConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Origin used in verification links when `PUBLIC_BASE_URL` is unset
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8000";

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub smtp: SmtpConfig,
    pub environment: Environment,
    /// Public origin of this service, embedded in emailed links
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqliteConfig::from_env()?; // Defaults to ./database.sqlite3
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8000
        let jwt = JwtConfig::from_env()?; // Required - will fail if JWT_SECRET is not set
        let smtp = SmtpConfig::from_env()?;
        let public_base_url = env_or_default("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL);

        Ok(Self {
            app: app_info!(),
            database,
            server,
            jwt,
            smtp,
            environment,
            public_base_url,
        })
    }
}
