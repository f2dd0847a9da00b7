//! Application configuration loaded from environment variables.

use std::env;

use forum_infra::{DatabaseConfig, JwtConfig, StoreOptions};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub store: StoreOptions,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
            ..DatabaseConfig::new(url)
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(3001),
            database,
            store: StoreOptions::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
