//! Configuration directory and persistent settings

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::permutation::PermutationStrategy;
use crate::unique::UniquenessStrategy;

/// Get the configuration directory for strgrid
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("strgrid"))
}

/// Get the config file path with optional override
pub fn config_file_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => Ok(config_dir()?.join("config.json")),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default permutation strategy
    pub permutation_strategy: Option<PermutationStrategy>,
    /// Default uniqueness strategy
    pub uniqueness_strategy: Option<UniquenessStrategy>,
    /// Print JSON unless told otherwise
    pub json_output: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from custom path, falling back to defaults when
    /// the file does not exist
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path(custom_path)?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path(custom_path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        permutation_strategy: Option<PermutationStrategy>,
        uniqueness_strategy: Option<UniquenessStrategy>,
        json_output: Option<bool>,
    ) -> Self {
        Self {
            permutation_strategy: permutation_strategy.or(self.permutation_strategy),
            uniqueness_strategy: uniqueness_strategy.or(self.uniqueness_strategy),
            json_output: json_output.or(self.json_output),
        }
    }

    /// Effective permutation strategy
    pub fn permutation_strategy(&self) -> PermutationStrategy {
        self.permutation_strategy.unwrap_or_default()
    }

    /// Effective uniqueness strategy
    pub fn uniqueness_strategy(&self) -> UniquenessStrategy {
        self.uniqueness_strategy.unwrap_or_default()
    }

    /// Whether output should be JSON
    pub fn json_output(&self) -> bool {
        self.json_output.unwrap_or(false)
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            permutation_strategy: Some(PermutationStrategy::default()),
            uniqueness_strategy: Some(UniquenessStrategy::default()),
            json_output: Some(false),
        }
    }
}
