use serde::Deserialize;

use crate::infrastructure::catalog::ModelSpec;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Catalog served by the built-in static resolver
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Region used when a query does not name one
    #[serde(default = "default_region")]
    pub default_region: String,
    #[serde(default)]
    pub models: Vec<ModelSpec>,
}

fn default_region() -> String {
    "us-west-2".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_region: default_region(),
            models: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config/default", "config/local")
    }

    /// Load from two optional files (any format the `config` crate knows)
    /// layered under `APP__*` environment variables.
    pub fn load_from(default_file: &str, local_file: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(default_file).required(false))
            .add_source(config::File::with_name(local_file).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
