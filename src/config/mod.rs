// src/config/mod.rs
pub mod types;

pub use self::types::{CameraConfig, Config, DisplayConfig, LimitsConfig, Palette, StyleConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "collabnet.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `collabnet.toml` from the working directory, or defaults when
    /// the file is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse_toml(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
    }

    /// # Errors
    /// Returns error if `content` is not valid TOML for this schema.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the size thresholds are inverted or a limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.style.low_factor > self.style.high_factor {
            anyhow::bail!(
                "style.low_factor ({}) exceeds style.high_factor ({})",
                self.style.low_factor,
                self.style.high_factor
            );
        }
        if self.limits.longest_path_max_nodes == Some(0) {
            anyhow::bail!("limits.longest_path_max_nodes must be at least 1");
        }
        Ok(())
    }

    /// Writes the configuration as pretty TOML.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}
