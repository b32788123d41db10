//! Application configuration management.

use serde::Deserialize;

use crate::types::TableId;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Validation and layout settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Table whose filled periods every other table must match.
    #[serde(default)]
    pub reference_table: TableId,
    /// Only check cross-table alignment while the layout shows a single row per table.
    #[serde(default)]
    pub restrict_mismatch_check_to_single_row: bool,
    /// Upper bound on tables per request.
    #[serde(default = "default_max_tables")]
    pub max_tables: u32,
    /// Upper bound on rows per table per request.
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,
}

fn default_max_tables() -> u32 {
    100
}

fn default_max_rows() -> u32 {
    100
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_table: TableId::REFERENCE,
            restrict_mismatch_check_to_single_row: false,
            max_tables: default_max_tables(),
            max_rows: default_max_rows(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TABULA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
