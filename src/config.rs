//! Configuration module
//!
//! Reads a TOML file with `server`, `security` and `logging` sections.
//! Every field falls back to a default, so a missing or partial file still
//! yields a runnable configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::infrastructure::crypto::token::TokenConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the HTTP API
    pub host: String,
    /// Port for the HTTP API
    pub port: u16,
    /// Seconds granted to in-flight requests during shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            shutdown_timeout: 10,
        }
    }
}

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Token signing seed. Must stay constant across restarts or every
    /// issued session becomes invalid.
    pub seed: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            seed: std::env::var("SEED")
                .unwrap_or_else(|_| "hetch-dev-seed-change-in-production".to_string()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable via RUST_LOG
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Signing configuration for the token issuer.
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig {
            seed: self.security.seed.clone(),
        }
    }

    /// Bind address for the HTTP API.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Default configuration path: `~/.config/hetch-accounts/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hetch-accounts")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_file_parses() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            shutdown_timeout = 30

            [security]
            seed = "file-seed"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.address(), "127.0.0.1:8080");
        assert_eq!(cfg.server.shutdown_timeout, 30);
        assert_eq!(cfg.security.seed, "file-seed");
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9999
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.security.seed.is_empty());
    }

    #[test]
    fn token_config_carries_the_seed() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [security]
            seed = "configured-seed"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.token_config().seed, "configured-seed");
    }

    #[test]
    fn default_config_seed_signs_verifiable_tokens() {
        use crate::infrastructure::crypto::token::{issue_token, verify_token};

        // Even with no config file, the security section resolves a seed
        // the token issuer can sign and verify with.
        let cfg = AppConfig::default();
        let token = issue_token("vessel@hetchfund.capital", false, &cfg.token_config()).unwrap();
        let claims = verify_token(&token, &cfg.token_config()).unwrap();
        assert_eq!(claims.email_address, "vessel@hetchfund.capital");
    }

    #[test]
    fn default_path_points_at_the_service_directory() {
        let path = default_config_path();
        assert!(path.ends_with("hetch-accounts/config.toml"));
    }
}
