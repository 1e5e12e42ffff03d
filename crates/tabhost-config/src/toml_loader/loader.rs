//! Reading a config file, falling back to the platform default location.

use std::io::ErrorKind;
use std::path::Path;

use tabhost_common::ConfigError;

use super::paths::{create_default_config, default_config_path};
use crate::schema::TabhostConfig;

/// Parse the TOML file at `path`. Absent fields take their defaults;
/// validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<TabhostConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = toml::from_str::<TabhostConfig>(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Load from [`default_config_path`]. A missing file is created from the
/// template and the defaults are returned.
pub fn load_default() -> Result<TabhostConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(TabhostConfig::default())
        }
        other => other,
    }
}
