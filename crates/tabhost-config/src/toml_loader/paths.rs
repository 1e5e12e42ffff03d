//! Where the config file lives, and writing the first-run template.

use std::path::{Path, PathBuf};
use tabhost_common::ConfigError;

use super::template::default_config_toml;

/// `<platform config dir>/tabhost/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("tabhost").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the documented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_error(path))?;

    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::Io { path, source }
}
