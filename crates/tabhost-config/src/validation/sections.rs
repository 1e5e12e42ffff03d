//! Per-section validators: window, chrome, tabs, logging.

use crate::schema::TabhostConfig;

use super::helpers::{validate_one_of, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &TabhostConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 10_000);
    validate_range(errors, "window.height", config.window.height, 150, 10_000);
    validate_range(errors, "window.min_width", config.window.min_width, 200, 10_000);
    validate_range(errors, "window.min_height", config.window.min_height, 150, 10_000);
    if config.window.min_width > config.window.width
        || config.window.min_height > config.window.height
    {
        errors.push(format!(
            "window minimum size {}x{} exceeds initial size {}x{}",
            config.window.min_width,
            config.window.min_height,
            config.window.width,
            config.window.height
        ));
    }
}

pub(crate) fn validate_chrome(errors: &mut Vec<String>, config: &TabhostConfig) {
    validate_range(errors, "chrome.top_height", config.chrome.top_height, 0, 1000);
    validate_range(
        errors,
        "chrome.side_panel_width",
        config.chrome.side_panel_width,
        0,
        2000,
    );
}

pub(crate) fn validate_tabs(errors: &mut Vec<String>, config: &TabhostConfig) {
    if config.tabs.home_url.trim().is_empty() {
        errors.push("tabs.home_url must not be empty".to_string());
    }
    if !config.tabs.search_url.contains("{query}") {
        errors.push(format!(
            "tabs.search_url = {:?} must contain {{query}}",
            config.tabs.search_url
        ));
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &TabhostConfig) {
    validate_one_of(
        errors,
        "logging.level",
        &config.logging.level,
        &["trace", "debug", "info", "warn", "error"],
    );
}
