//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tabhost Configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Tabhost"
# width = 1280            # 200-10000
# height = 800            # 150-10000
# min_width = 200         # 200-10000, at most width
# min_height = 150        # 150-10000, at most height

[chrome]
# Used until the UI reports its measured size.
# top_height = 80         # 0-1000
# side_panel_width = 0    # 0-2000

[tabs]
# home_url = "https://duckduckgo.com"
# search_url = "https://duckduckgo.com/?q={query}"
# on_last_tab_closed = "new-tab"   # new-tab, empty

[surface]
# user_agent = "Tabhost/0.1"
# devtools = false
# autoplay = false
# data_directory = "/path/to/profile"

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
