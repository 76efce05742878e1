//! Server settings read from the environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;

/// File-backed database next to the working directory, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5555";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Insert sample restaurants and pizzas when the store is empty.
    pub seed_sample_data: bool,
}

impl ServerConfig {
    /// Reads `DB_URI`, `BIND_ADDR`, `DB_MAX_CONNECTIONS` and `SEED_SAMPLE_DATA`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_URI")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.trim().parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value: v.clone(),
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(v) => parse_flag("SEED_SAMPLE_DATA", &v)?,
            None => false,
        };

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            seed_sample_data,
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_file_backed_sqlite() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DB_URI", "sqlite:///tmp/pizzas.db"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("SEED_SAMPLE_DATA", "true"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite:///tmp/pizzas.db");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_connections, 2);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn blank_database_url_falls_back() {
        let config = config_from(&[("DB_URI", "  ")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));

        let err = config_from(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. }));

        let err = config_from(&[("SEED_SAMPLE_DATA", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SEED_SAMPLE_DATA", .. }));
    }
}
