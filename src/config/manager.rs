use super::{
    data::DataConfig,
    splitting::SplittingConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::TsxvError;
use config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `TSXV_SPLITTING__NUM_JUMPS=2`
pub const ENV_PREFIX: &str = "TSXV";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub splitting: SplittingConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), TsxvError> {
        self.splitting.validate()?;
        self.data.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![self.splitting.to_manifest(), self.data.to_manifest()]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, with `TSXV_*` environment variables taking precedence
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TsxvError> {
        let builder = config::Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        self.load_sources(builder)
    }

    /// Apply `TSXV_*` environment variables on top of the defaults
    pub fn load_from_env(&self) -> Result<(), TsxvError> {
        self.load_sources(config::Config::builder())
    }

    fn load_sources(&self, builder: ConfigBuilder<DefaultState>) -> Result<(), TsxvError> {
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| TsxvError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| TsxvError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TsxvError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| TsxvError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), TsxvError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
