//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::TabhostConfig;
use tabhost_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TabhostConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_window(&mut errors, config);
    sections::validate_chrome(&mut errors, config);
    sections::validate_tabs(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
