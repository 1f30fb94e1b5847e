//! Demo configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. With nothing set, the demo prints its plain text output.
//!
//! | Variable                  | Default | Meaning                         |
//! |---------------------------|---------|---------------------------------|
//! | `BOOKSTORE_LOG`           | `warn`  | `EnvFilter` directive (stderr)  |
//! | `BOOKSTORE_REPORT_FORMAT` | `text`  | `text` or `json` inventory report |

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BOOKSTORE_LOG";

/// Environment variable selecting the inventory report format.
pub const REPORT_FORMAT_ENV: &str = "BOOKSTORE_REPORT_FORMAT";

/// How the inventory report section is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidValue(REPORT_FORMAT_ENV.to_string())),
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Inventory report format
    pub report_format: ReportFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            log_filter: "warn".to_string(),
            report_format: ReportFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DemoConfig::default();

        let config = DemoConfig {
            log_filter: lookup(LOG_ENV)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),

            report_format: match lookup(REPORT_FORMAT_ENV) {
                Some(value) => value.parse()?,
                None => defaults.report_format,
            },
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
