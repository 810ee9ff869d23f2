//! Configuration management for finboard
//!
//! This module handles loading, validation, and management of
//! finboard configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin requests from the dashboard frontend
    #[serde(default = "default_true")]
    pub cors_enable: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enable: true,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_true() -> bool {
    true
}

/// Data directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to data directory
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Transactions fixture file name (JSON array)
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            transactions_file: default_transactions_file(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_transactions_file() -> String {
    "transactions.json".to_string()
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a view is first opened
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Page sizes a view may switch between
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,
    /// Clamp the current page to the last page when a view shrinks
    /// instead of showing an empty page
    #[serde(default)]
    pub clamp_out_of_range: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_sizes: default_page_sizes(),
            clamp_out_of_range: false,
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_page_sizes() -> Vec<usize> {
    vec![5, 10, 20, 50]
}

/// Currency display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency symbol shown next to amounts
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Currency symbol position ("before" or "after")
    #[serde(default)]
    pub symbol_position: SymbolPosition,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            symbol_position: SymbolPosition::Before,
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

/// Currency symbol position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

impl Default for SymbolPosition {
    fn default() -> Self {
        SymbolPosition::Before
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Data directory settings
    #[serde(default)]
    pub data: DataConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.pagination.page_sizes.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pagination.page_sizes".to_string(),
                reason: "At least one page size is required".to_string(),
            });
        }

        if self.pagination.page_sizes.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "pagination.page_sizes".to_string(),
                reason: "Page sizes must be greater than 0".to_string(),
            });
        }

        if !self.pagination.page_sizes.contains(&self.pagination.default_page_size) {
            return Err(ConfigError::InvalidValue {
                field: "pagination.default_page_size".to_string(),
                reason: format!(
                    "Default page size must be one of {:?}",
                    self.pagination.page_sizes
                ),
            });
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.level".to_string(),
                    reason: format!("Unknown log level: {}", other),
                });
            }
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Get the full path to the transactions fixture file
    pub fn transactions_path(&self) -> PathBuf {
        self.data.path.join(&self.data.transactions_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.page_sizes, vec![5, 10, 20, 50]);
        assert!(!config.pagination.clamp_out_of_range);
    }

    #[test]
    fn test_default_template_parses() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.data.transactions_file, "transactions.json");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("pagination:\n  clamp_out_of_range: true\n").unwrap();
        assert!(config.pagination.clamp_out_of_range);
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_default_page_size_must_be_allowed() {
        let yaml = "pagination:\n  default_page_size: 15\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "pagination.default_page_size"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let yaml = "pagination:\n  page_sizes: [0, 10]\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let yaml = "logging:\n  level: loud\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Config::from_yaml("server: [").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYaml { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(PathBuf::from("./no/such/finboard.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_directory_keeps_io_error() {
        let dir = std::env::temp_dir();
        let err = Config::load(dir.clone()).unwrap_err();
        match err {
            ConfigError::Unreadable { ref path, ref source } => {
                assert_eq!(path, &dir.to_string_lossy().to_string());
                assert!(!source.to_string().is_empty());
            }
            other => panic!("expected Unreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_transactions_path() {
        let config = Config::default();
        assert_eq!(config.transactions_path(), PathBuf::from("./data/transactions.json"));
    }
}
