//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use depot_core::DepotError;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader over layered sources.
#[derive(Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. Environment variables with `DEPOT_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, DepotError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, DepotError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, DepotError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("DEPOT_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Environment variable overrides, e.g. DEPOT_SERVER__REST_PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("DEPOT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| DepotError::Configuration(format!("Failed to build config: {}", e)))?;

        let config = config
            .try_deserialize::<AppConfig>()
            .map_err(|e| DepotError::Configuration(format!("Failed to parse config: {}", e)))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Rejects configurations the application cannot run with.
    fn validate(config: &AppConfig) -> Result<(), DepotError> {
        if config.listing.page_size == 0 {
            return Err(DepotError::Configuration(
                "listing.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_dir_falls_back_to_defaults() {
        let loader = ConfigLoader::new("./does-not-exist").expect("defaults should load");
        assert_eq!(loader.get().listing.page_size, 10);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let mut config = AppConfig::default();
        config.listing.page_size = 0;

        let err = ConfigLoader::validate(&config).unwrap_err();
        assert!(matches!(err, DepotError::Configuration(_)));
    }
}
