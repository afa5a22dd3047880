//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ADDR_CLI_FORMAT` - Output format, `table` or `json` (default: table)
//! - `ADDR_CLI_LOG` - Log filter directive (default: warn). `RUST_LOG` takes
//!   precedence when set.
//! - `ADDR_CLI_LOG_FORMAT` - Log line format, `text` or `json` (default: text)
//!
//! Command-line flags override the values loaded here.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::render::OutputFormat;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid log format: {s} (expected text or json)")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// How registry state is rendered on stdout
    pub format: OutputFormat,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognized value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = parse_optional(&lookup, "ADDR_CLI_FORMAT")?.unwrap_or_default();
        let log_filter = lookup("ADDR_CLI_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::try_new(&log_filter)
            .map_err(|e| ConfigError::InvalidEnvVar("ADDR_CLI_LOG".to_string(), e.to_string()))?;
        let log_format = parse_optional(&lookup, "ADDR_CLI_LOG_FORMAT")?.unwrap_or_default();

        Ok(Self {
            format,
            log_filter,
            log_format,
        })
    }

    /// Apply a `--format` flag on top of the loaded configuration.
    #[must_use]
    pub fn with_format_override(self, format: Option<OutputFormat>) -> Self {
        Self {
            format: format.unwrap_or(self.format),
            ..self
        }
    }
}

/// Parse an optional variable, treating empty values as unset.
fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr<Err = String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e)),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            ("ADDR_CLI_FORMAT", "json"),
            ("ADDR_CLI_LOG", "address_registry=debug"),
            ("ADDR_CLI_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "address_registry=debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_value_is_unset() {
        let config = CliConfig::from_lookup(lookup(&[("ADDR_CLI_FORMAT", "  ")])).unwrap();
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_format() {
        let err = CliConfig::from_lookup(lookup(&[("ADDR_CLI_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ADDR_CLI_FORMAT"));
    }

    #[test]
    fn test_invalid_log_format() {
        let err = CliConfig::from_lookup(lookup(&[("ADDR_CLI_LOG_FORMAT", "yaml")])).unwrap_err();
        assert!(err.to_string().contains("ADDR_CLI_LOG_FORMAT"));
    }

    #[test]
    fn test_invalid_log_filter() {
        let err = CliConfig::from_lookup(lookup(&[("ADDR_CLI_LOG", "address_registry=notalevel")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ADDR_CLI_LOG"));
    }

    #[test]
    fn test_format_flag_overrides_env() {
        let config = CliConfig::from_lookup(lookup(&[("ADDR_CLI_FORMAT", "json")])).unwrap();
        let config = config.with_format_override(Some(OutputFormat::Table));
        assert_eq!(config.format, OutputFormat::Table);

        let config = CliConfig::from_lookup(lookup(&[("ADDR_CLI_FORMAT", "table")])).unwrap();
        let config = config.with_format_override(Some(OutputFormat::Json));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_format_flag_keeps_env() {
        let config = CliConfig::from_lookup(lookup(&[
            ("ADDR_CLI_FORMAT", "json"),
            ("ADDR_CLI_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        let merged = config.clone().with_format_override(None);
        assert_eq!(merged, config);
        assert_eq!(merged.format, OutputFormat::Json);
    }
}
