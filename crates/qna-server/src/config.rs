//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
///
/// Unset fields fall back to their defaults, so a bare environment
/// with only `QNA_DATABASE_URL` set is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// PostgreSQL connection URL
    pub database_url: String,

    /// Upper bound on pooled store connections
    pub max_connections: u32,

    /// Log level
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            database_url: "postgresql://localhost:5432/qna".to_string(),
            max_connections: 10,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        // The file source is optional; a build error here is a real
        // problem (e.g. a malformed file) and must not be mistaken
        // for "no configuration supplied".
        let cfg = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("QNA"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build configuration: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }
}
