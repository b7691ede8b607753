//! Configuration loader

use config::{Config, Environment, File, FileFormat};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::Result;

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP__, e.g. `APP__SETTINGS__LOG_LEVEL`)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
