//! Tab behavior configuration types.

use serde::{Deserialize, Serialize};

/// What the UI does after the last tab closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastTabPolicy {
    /// Open a fresh tab at the home URL.
    #[default]
    NewTab,
    /// Leave the window empty.
    Empty,
}

/// Tab creation and address resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// URL used when a tab is created without one.
    pub home_url: String,
    /// Search URL template; `{query}` is replaced with the encoded input.
    pub search_url: String,
    pub on_last_tab_closed: LastTabPolicy,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            home_url: "https://duckduckgo.com".to_string(),
            search_url: "https://duckduckgo.com/?q={query}".to_string(),
            on_last_tab_closed: LastTabPolicy::NewTab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_config_defaults() {
        let config = TabsConfig::default();
        assert!(config.search_url.contains("{query}"));
        assert!(config.home_url.starts_with("https://"));
        assert_eq!(config.on_last_tab_closed, LastTabPolicy::NewTab);
    }

    #[test]
    fn last_tab_policy_kebab_case() {
        let config: TabsConfig = toml::from_str(r#"on_last_tab_closed = "empty""#).unwrap();
        assert_eq!(config.on_last_tab_closed, LastTabPolicy::Empty);
        let config: TabsConfig = toml::from_str(r#"on_last_tab_closed = "new-tab""#).unwrap();
        assert_eq!(config.on_last_tab_closed, LastTabPolicy::NewTab);
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let result: Result<TabsConfig, _> = toml::from_str(r#"on_last_tab_closed = "explode""#);
        assert!(result.is_err());
    }
}
