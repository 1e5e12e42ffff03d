//! Content surface and logging configuration types.

use serde::{Deserialize, Serialize};

/// Settings applied to every content surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub user_agent: Option<String>,
    /// Enable dev tools on content tabs.
    pub devtools: bool,
    pub autoplay: bool,
    /// Storage partition shared by all tabs. `None` uses the engine default.
    pub data_directory: Option<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            autoplay: false,
            data_directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
