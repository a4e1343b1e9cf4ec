// ============================================================
// CONFIGURATION
// ============================================================
// Layered config: config.toml overridden by LEADIMPORT_* env vars

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3002,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Base URL of the application backend that owns lead storage
    /// and deduplication.
    pub endpoint_base_url: String,

    /// Seconds before an in-flight submission is abandoned.
    pub request_timeout_secs: u64,

    /// Rows shown in the staging preview.
    pub preview_rows: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            endpoint_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
            preview_rows: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

impl AppConfig {
    /// Load `config.toml` (optional) merged with `LEADIMPORT_`
    /// environment variables, e.g. `LEADIMPORT_SERVER__PORT=4000`.
    pub fn load() -> Result<Self> {
        Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LEADIMPORT_").split("__"))
            .extract()
            .map_err(|e| AppError::Internal(format!("Failed to load configuration: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3002);
        assert_eq!(config.import.preview_rows, 10);
        assert_eq!(config.import.request_timeout_secs, 30);
    }
}
