//! The content-surface seam between the tab core and the rendering engine.

use tabhost_common::{Bounds, SurfaceError};

/// Inert page used to abort in-flight work on a closing surface.
pub const BLANK_URL: &str = "about:blank";

/// Control operations the tab core needs from an embedded content view.
///
/// Loads and traversals are queued by the engine; a returned `Ok` only
/// means the request was accepted. Progress is reported through the
/// surface's `SurfaceEmitter`.
pub trait ContentSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn go_back(&mut self) -> Result<(), SurfaceError>;
    fn go_forward(&mut self) -> Result<(), SurfaceError>;
    fn reload(&mut self) -> Result<(), SurfaceError>;

    /// Pause media playback and release audio resources held by the page.
    fn stop_media(&mut self) -> Result<(), SurfaceError>;
    fn set_muted(&mut self, muted: bool) -> Result<(), SurfaceError>;

    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), SurfaceError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError>;
    /// Whether the surface is currently shown in the window, as far as the
    /// embedding API has actually applied it.
    fn is_visible(&self) -> bool;
    fn focus(&mut self) -> Result<(), SurfaceError>;
}

/// Immutable security/capability profile shared by every content tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityProfile {
    /// Pages run isolated from the shell: no custom protocol access.
    pub isolated_origins: bool,
    /// Pages may message the host process (IPC). Off for content tabs.
    pub host_integration: bool,
    /// All tabs share one network/storage partition.
    pub shared_partition: bool,
    pub devtools: bool,
    pub autoplay: bool,
    pub user_agent: Option<String>,
}

impl Default for CapabilityProfile {
    fn default() -> Self {
        Self::content()
    }
}

impl CapabilityProfile {
    /// The restrictive profile used for web content tabs.
    pub fn content() -> Self {
        Self {
            isolated_origins: true,
            host_integration: false,
            shared_partition: true,
            devtools: false,
            autoplay: false,
            user_agent: None,
        }
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes a content tab may navigate to. Everything else (`file:`,
/// `javascript:`, `data:`, the shell's own `tabhost://` scheme) is blocked.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["https://", "http://", BLANK_URL];

/// Check whether a content tab may navigate to `url`.
pub fn is_navigation_allowed(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://tabhost.localhost") {
        return false;
    }
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_profile_is_restrictive() {
        let profile = CapabilityProfile::content();
        assert!(profile.isolated_origins);
        assert!(!profile.host_integration);
        assert!(profile.shared_partition);
    }

    #[test]
    fn builder_methods_keep_security_flags() {
        let profile = CapabilityProfile::content()
            .with_devtools(true)
            .with_autoplay(true)
            .with_user_agent(Some("Tabhost/0.1".into()));
        assert!(profile.devtools);
        assert!(profile.autoplay);
        assert_eq!(profile.user_agent.as_deref(), Some("Tabhost/0.1"));
        assert!(!profile.host_integration);
    }

    #[test]
    fn allows_web_and_blank() {
        assert!(is_navigation_allowed("https://example.com"));
        assert!(is_navigation_allowed("http://localhost:8080"));
        assert!(is_navigation_allowed("HTTPS://EXAMPLE.COM"));
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("file://localhost/etc/hosts"));
    }

    #[test]
    fn blocks_javascript_and_data() {
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("data:text/html,<h1>XSS</h1>"));
    }

    #[test]
    fn blocks_shell_assets() {
        assert!(!is_navigation_allowed("tabhost://localhost/chrome/index.html"));
        // WebView2 rewrites custom protocols to http://<scheme>.localhost
        assert!(!is_navigation_allowed("http://tabhost.localhost/chrome/index.html"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("not-a-url"));
        assert!(!is_navigation_allowed("ftp://files.example.com"));
    }
}
