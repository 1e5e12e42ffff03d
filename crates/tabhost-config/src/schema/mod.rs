//! Configuration schema types for Tabhost.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod surface;
mod tabs;
mod window;

pub use surface::*;
pub use tabs::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Tabhost.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabhostConfig {
    pub window: WindowConfig,
    pub chrome: ChromeConfig,
    pub tabs: TabsConfig,
    pub surface: SurfaceConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: TabhostConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Tabhost");
        assert_eq!(config.chrome.top_height, 80);
        assert_eq!(config.tabs.on_last_tab_closed, LastTabPolicy::NewTab);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = TabhostConfig::default();
        config.chrome.side_panel_width = 240;
        config.tabs.on_last_tab_closed = LastTabPolicy::Empty;

        let text = toml::to_string(&config).unwrap();
        let parsed: TabhostConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.chrome.side_panel_width, 240);
        assert_eq!(parsed.tabs.on_last_tab_closed, LastTabPolicy::Empty);
    }
}
