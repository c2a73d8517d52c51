use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use stringlens_core::service::DEFAULT_MAX_VALUE_LENGTH;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
        }
    }
}

impl DatabaseConfig {
    fn default_url() -> String {
        "sqlite://strings.db?mode=rwc".to_string()
    }

    fn in_dir(dir: &Path) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", dir.join("strings.db").display()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Longest value accepted on create, in characters.
    #[serde(default = "AnalysisConfig::default_max_value_length")]
    pub max_value_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_value_length: Self::default_max_value_length(),
        }
    }
}

impl AnalysisConfig {
    const fn default_max_value_length() -> usize {
        DEFAULT_MAX_VALUE_LENGTH
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("stringlens"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'stringlens init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Default configuration with the database placed in `dir`.
    #[must_use]
    pub fn template(dir: &Path) -> Self {
        Self {
            database: DatabaseConfig::in_dir(dir),
            ..Self::default()
        }
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::template(&config_dir))?;
        std::fs::write(&config_path, content)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - database.url: sqlite://, postgresql:// or mysql:// connection string");
        println!("   - analysis.max_value_length: longest string accepted by 'stringlens add'");
        println!("   - logging.level: default log filter (RUST_LOG overrides it)");
        println!();
        Ok(config_path)
    }
}
