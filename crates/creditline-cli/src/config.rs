//! CLI configuration management.

use clap::ValueEnum;
use creditline_core::{Error, Result};
use creditline_stripe::StripeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Stripe API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_api_key: Option<String>,
    /// Credit currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl CliConfig {
    /// Load configuration from the default file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    ///
    /// A file that exists but does not parse is an error, never defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("dev", "creditline", "creditline")
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Set a configuration value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "stripe_api_key" => self.stripe_api_key = Some(value.to_string()),
            "currency" => self.currency = Some(value.to_lowercase()),
            "output_format" => {
                self.output_format = OutputFormat::from_str(value, true)
                    .map_err(|_| Error::Config(format!("Invalid output format: {}", value)))?;
            }
            _ => return Err(Error::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// Stripe settings: file values first, then environment overrides.
    pub fn stripe_config(&self) -> StripeConfig {
        let mut config = StripeConfig::default();
        if let Some(key) = &self.stripe_api_key {
            config.api_key = key.clone();
        }
        if let Some(currency) = &self.currency {
            config.currency = currency.clone();
        }
        config.with_env_overrides()
    }
}
