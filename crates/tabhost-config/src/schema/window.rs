//! Window and chrome geometry configuration types.

use serde::{Deserialize, Serialize};

/// Host window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown when no tab has a title yet.
    pub title: String,
    /// Initial logical width (valid range: 200-10000).
    pub width: u32,
    /// Initial logical height (valid range: 150-10000).
    pub height: u32,
    /// Smallest logical width the window may be resized to.
    pub min_width: u32,
    /// Smallest logical height the window may be resized to.
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tabhost".to_string(),
            width: 1280,
            height: 800,
            min_width: 200,
            min_height: 150,
        }
    }
}

/// Chrome geometry used until the UI reports its real size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Tab strip + navigation bar height in pixels (valid range: 0-1000).
    pub top_height: u32,
    /// Side panel width in pixels (valid range: 0-2000).
    pub side_panel_width: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            top_height: 80,
            side_panel_width: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Tabhost");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert_eq!((config.min_width, config.min_height), (200, 150));
    }

    #[test]
    fn chrome_config_partial_toml() {
        let config: ChromeConfig = toml::from_str("top_height = 96").unwrap();
        assert_eq!(config.top_height, 96);
        // Defaults preserved
        assert_eq!(config.side_panel_width, 0);
    }
}
