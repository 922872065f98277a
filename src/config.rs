use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket to listen on instead of `listen`
    pub socket: Option<String>,

    /// Database configuration
    pub database: Option<DatabaseConfig>,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self {
            url,
            max_connections: default_max_connections(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - BOARD_LISTEN
    /// - BOARD_SOCKET
    /// - BOARD_DATABASE_URL or DATABASE_URL
    /// - BOARD_DATABASE_MAX_CONNECTIONS
    ///
    /// OpenTelemetry export is configured separately through the standard
    /// `OTEL_*` variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(Figment::new().merge(Env::prefixed("BOARD_").split("_")))
    }

    fn from_figment(overrides: Figment) -> Result<Self, figment::Error> {
        let figment = Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(overrides);

        let mut config: Config = figment.extract()?;

        // Handle DATABASE_URL without prefix for compatibility
        if config.database.is_none() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                config.database = Some(DatabaseConfig::new(url));
            }
        }

        Ok(config)
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::from_figment(Figment::new()).unwrap();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert!(config.socket.is_none());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = Figment::new().merge(Serialized::defaults(serde_json::json!({
            "listen": "0.0.0.0:8080",
            "database": { "url": "postgres:///board" }
        })));

        let config = Config::from_figment(overrides).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080");

        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres:///board");
        assert_eq!(database.max_connections, 5);
    }
}
