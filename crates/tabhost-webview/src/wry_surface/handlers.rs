use std::sync::{Arc, Mutex};

use tabhost_common::TabId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{SurfaceEmitter, SurfaceEvent};
use crate::history::NavHistory;
use crate::surface::is_navigation_allowed;

// =============================================================================
// FAVICON
// =============================================================================

/// Conventional favicon location for an `http(s)` page.
pub fn default_favicon(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return None;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        return None;
    }
    Some(format!("{scheme}://{host}/favicon.ico"))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

/// Page loads feed history and emit navigated/loading/favicon events.
pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    emitter: SurfaceEmitter,
    history: Arc<Mutex<NavHistory>>,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| match event {
        wry::PageLoadEvent::Started => {
            debug!(tab_id = %emitter.tab_id(), url = %url, "load started");
            if let Ok(mut h) = history.lock() {
                h.on_load_started(&url);
            }
            emitter.emit(SurfaceEvent::Navigated(url));
            emitter.emit(SurfaceEvent::LoadStarted);
        }
        wry::PageLoadEvent::Finished => {
            debug!(tab_id = %emitter.tab_id(), url = %url, "load finished");
            emitter.emit(SurfaceEvent::LoadStopped);
            if let Some(icon) = default_favicon(&url) {
                emitter.emit(SurfaceEvent::FaviconChanged(icon));
            }
        }
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    emitter: SurfaceEmitter,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(tab_id = %emitter.tab_id(), title = %title, "title changed");
        emitter.emit(SurfaceEvent::TitleChanged(title));
    })
}

/// Isolated surfaces may only reach the web and the blank page.
pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    tab_id: TabId,
    isolated: bool,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        if isolated && !is_navigation_allowed(&url) {
            warn!(tab_id = %tab_id, url = %url, "navigation blocked");
            return false;
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_for_https_page() {
        assert_eq!(
            default_favicon("https://example.com/path/page.html?x=1").as_deref(),
            Some("https://example.com/favicon.ico")
        );
    }

    #[test]
    fn favicon_keeps_port() {
        assert_eq!(
            default_favicon("http://localhost:8080/").as_deref(),
            Some("http://localhost:8080/favicon.ico")
        );
    }

    #[test]
    fn favicon_for_bare_host() {
        assert_eq!(
            default_favicon("https://example.com").as_deref(),
            Some("https://example.com/favicon.ico")
        );
    }

    #[test]
    fn no_favicon_for_other_schemes() {
        assert_eq!(default_favicon("about:blank"), None);
        assert_eq!(default_favicon("file:///tmp/a.html"), None);
        assert_eq!(default_favicon("https://"), None);
    }
}
