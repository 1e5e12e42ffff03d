//! Tabhost configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabhost_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("home page: {}", config.tabs.home_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LastTabPolicy, TabhostConfig};

use std::path::Path;

use tabhost_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a documented template written on first run.
/// Invalid configs are rejected so the caller can fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<TabhostConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chrome]\ntop_height = 5000\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("chrome.top_height"));
    }

    #[test]
    fn load_config_accepts_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tabs]\nhome_url = \"https://example.org\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.tabs.home_url, "https://example.org");
        assert_eq!(config.chrome.top_height, 80);
    }
}
