//! `wry`-backed content surfaces.
//!
//! `WrySurfaceFactory` builds one child `wry::WebView` per tab inside the
//! host window; `WrySurface` adapts it to the `ContentSurface` seam.

mod factory;
mod handlers;
mod scripts;

pub use factory::WrySurfaceFactory;
pub use handlers::default_favicon;

use std::sync::{Arc, Mutex};

use tabhost_common::{Bounds, SurfaceError, TabId};
use tracing::debug;
use wry::WebView;

use crate::bounds::bounds_to_wry;
use crate::history::NavHistory;
use crate::surface::{is_navigation_allowed, ContentSurface};

fn engine(e: wry::Error) -> SurfaceError {
    SurfaceError::Engine(e.to_string())
}

/// A tab's child webview. Dropping it destroys the engine view.
pub struct WrySurface {
    pub(super) webview: WebView,
    pub(super) tab_id: TabId,
    /// Shared with the page-load handler, which records committed loads.
    pub(super) history: Arc<Mutex<NavHistory>>,
    pub(super) visible: bool,
    /// Copied from the profile; refused URLs never reach the engine.
    pub(super) isolated: bool,
}

impl WrySurface {
    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    fn traverse(&self, back: bool) -> Result<(), SurfaceError> {
        let target = {
            let mut history = self
                .history
                .lock()
                .map_err(|_| SurfaceError::Engine("history lock poisoned".into()))?;
            if back {
                history.go_back()
            } else {
                history.go_forward()
            }
        };
        match target {
            Some(url) => {
                debug!(tab_id = %self.tab_id, url = %url, back, "history traversal");
                let script = if back { "history.back();" } else { "history.forward();" };
                self.webview.evaluate_script(script).map_err(engine)
            }
            None => Err(SurfaceError::Engine("no history entry in that direction".into())),
        }
    }
}

impl ContentSurface for WrySurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        // The navigation handler would cancel it without any load event.
        if self.isolated && !is_navigation_allowed(url) {
            return Err(SurfaceError::Refused(url.to_string()));
        }
        self.webview.load_url(url).map_err(engine)
    }

    fn can_go_back(&self) -> bool {
        self.history.lock().map(|h| h.can_go_back()).unwrap_or(false)
    }

    fn can_go_forward(&self) -> bool {
        self.history
            .lock()
            .map(|h| h.can_go_forward())
            .unwrap_or(false)
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.traverse(true)
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        self.traverse(false)
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script("location.reload();")
            .map_err(engine)
    }

    fn stop_media(&mut self) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(scripts::STOP_MEDIA_SCRIPT)
            .map_err(engine)
    }

    fn set_muted(&mut self, muted: bool) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(&scripts::set_muted_script(muted))
            .map_err(engine)
    }

    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), SurfaceError> {
        self.webview.set_bounds(bounds_to_wry(&bounds)).map_err(engine)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(visible).map_err(engine)?;
        self.visible = visible;
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.webview.focus().map_err(engine)
    }
}
