//! Configuration types

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
    /// Pretty-print the output document
    #[serde(default)]
    pub pretty_output: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            pretty_output: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str(r#"{"settings": {"log_format": "json"}}"#).unwrap();

        assert_eq!(config.settings.log_level, "info");
        assert_eq!(config.settings.log_format, LogFormat::Json);
        assert!(!config.settings.pretty_output);
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.settings.log_format, LogFormat::Text);
    }
}
