//! Run configuration
//!
//! Loaded from an optional JSON file; every key has a default. Command-line
//! flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use crate::observability::Severity;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Document store path (default "db.json")
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Rejection log path (default "errors.txt")
    #[serde(default = "default_rejection_log")]
    pub rejection_log: PathBuf,

    /// Directory response documents are written to (default ".")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Identity token embedded in response file names (default "flightdb")
    #[serde(default = "default_response_id")]
    pub response_id: String,

    /// Minimum log severity (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("db.json")
}
fn default_rejection_log() -> PathBuf {
    PathBuf::from("errors.txt")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_response_id() -> String {
    "flightdb".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            rejection_log: default_rejection_log(),
            output_dir: default_output_dir(),
            response_id: default_response_id(),
            log_level: default_log_level(),
        }
    }
}

impl RunConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: RunConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Builds the effective configuration: file (if given), then flag overrides.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(output) = &cli.output {
            config.store_path = output.clone();
        }
        if let Some(response_id) = &cli.response_id {
            config.response_id = response_id.clone();
        }
        if let Some(log_level) = &cli.log_level {
            config.log_level = log_level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> CliResult<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(CliError::config_error("store_path must not be empty"));
        }

        if self.rejection_log.as_os_str().is_empty() {
            return Err(CliError::config_error("rejection_log must not be empty"));
        }

        if self.response_id.trim().is_empty() {
            return Err(CliError::config_error("response_id must not be empty"));
        }

        if self.response_id.contains(['/', '\\']) {
            return Err(CliError::config_error(format!(
                "Invalid response_id: '{}'. Path separators are not allowed.",
                self.response_id
            )));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("flightdb.json");
        fs::write(&config_path, "{}").unwrap();

        let config = RunConfig::load(&config_path).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.store_path, PathBuf::from("db.json"));
        assert_eq!(config.rejection_log, PathBuf::from("errors.txt"));
        assert_eq!(config.severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_config_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("flightdb.json");
        let config_json = json!({
            "store_path": "/data/flights.json",
            "response_id": "231ADB260",
            "log_level": "info"
        });
        fs::write(&config_path, config_json.to_string()).unwrap();

        let config = RunConfig::load(&config_path).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/data/flights.json"));
        assert_eq!(config.response_id, "231ADB260");
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_config_rejects_path_in_response_id() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("flightdb.json");
        fs::write(&config_path, json!({"response_id": "../etc"}).to_string()).unwrap();

        assert!(RunConfig::load(&config_path).is_err());
    }

    #[test]
    fn test_config_rejects_unknown_log_level() {
        let cli = Cli {
            queries: Some(PathBuf::from("q.json")),
            log_level: Some("chatty".into()),
            ..Default::default()
        };
        let err = RunConfig::resolve(&cli).unwrap_err();
        assert!(err.message().contains("log_level"));
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("flightdb.json");
        fs::write(&config_path, json!({"store_path": "file.json"}).to_string()).unwrap();

        let cli = Cli {
            input: Some(PathBuf::from("f.csv")),
            output: Some(PathBuf::from("flag.json")),
            config: Some(config_path),
            ..Default::default()
        };
        let config = RunConfig::resolve(&cli).unwrap();
        assert_eq!(config.store_path, PathBuf::from("flag.json"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = RunConfig::load(&temp_dir.path().join("absent.json"));
        assert_eq!(result.unwrap_err().code_str(), "FLIGHT_CLI_CONFIG_ERROR");
    }
}
