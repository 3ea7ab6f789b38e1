// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::DEFAULT_THRESHOLD;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// JSON corpus to load. `None` uses the bundled corpus.
    #[serde(default)]
    pub faq_path: Option<String>,
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            faq_path: None,
            similarity_threshold: DEFAULT_THRESHOLD,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        if !(0.0..=1.0).contains(&config.similarity_threshold) {
            return Err(anyhow::anyhow!(
                "similarity_threshold in '{}' must be between 0 and 1, got {}",
                path.display(),
                config.similarity_threshold
            ));
        }

        Ok(config)
    }

    /// Loads the config, falling back to defaults only when the file does not exist.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::info!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Whether an error from `load` means the config file was missing.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration, writing through a temp file so a crash never leaves half a file.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, toml_str)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
