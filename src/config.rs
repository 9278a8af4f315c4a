//! Configuration management for the resume ATS analyzer

use crate::error::{AtsAnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

// The names here are the same vocabulary `cli::parse_output_format` accepts,
// so a value copied between the config file and the --output flag works in
// both places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where analysis history is kept between runs.
    pub history_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let history_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resume-ats-analyzer")
            .join("history.json");

        Self {
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
            storage: StorageConfig { history_path },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                AtsAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AtsAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats-analyzer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Console);
        assert!(!config.output.detailed);
        assert!(config.storage.history_path.ends_with("history.json"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.output.format, config.output.format);
        assert_eq!(parsed.storage.history_path, config.storage.history_path);
    }

    #[test]
    fn test_format_names_match_cli_vocabulary() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("format = \"console\""));

        // A hand-edited file using the --output spelling parses too.
        let edited = content.replace("format = \"console\"", "format = \"markdown\"");
        let parsed: Config = toml::from_str(&edited).unwrap();
        assert_eq!(parsed.output.format, OutputFormat::Markdown);
        assert_eq!(
            crate::cli::parse_output_format("markdown").unwrap(),
            parsed.output.format
        );
    }
}
