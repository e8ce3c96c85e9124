use axum_helpers::{BasicAuthConfig, Locale};
use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};

// Import database configs from the database library
use database::common::RetryConfig;
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration.
/// Composes shared config components from the `config` library.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
    pub auth: BasicAuthConfig,
    /// Used when `Accept-Language` names no supported locale (`DEFAULT_LOCALE`, default `en`)
    pub default_locale: Locale,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?, // HOST=0.0.0.0, PORT=8080 unless set
            database: PostgresConfig::from_env()?, // Required - will fail if DATABASE_URL is not set
            retry: RetryConfig::from_env()?,
            auth: BasicAuthConfig::from_env()?, // Required - API_USERNAME / API_PASSWORD
            default_locale: env_parse_or("DEFAULT_LOCALE", Locale::En)?,
        })
    }
}
