//! The chrome view: the privileged webview hosting the tab strip and
//! navigation bar.
//!
//! Unlike content tabs it gets the IPC bridge and the `tabhost://` asset
//! protocol, and it may only navigate within the bundled assets.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use tabhost_common::{Bounds, SurfaceError};
use tracing::{debug, warn};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use crate::bounds::bounds_to_wry;
use crate::content::{asset_path, ContentProvider};
use crate::ipc::{is_valid_ipc_body, js_dispatch_message, IPC_INIT_SCRIPT};

/// Entry page of the bundled chrome.
pub const CHROME_URL: &str = "tabhost://localhost/chrome/index.html";

/// Origins the chrome view may navigate to.
const CHROME_NAV_PREFIXES: &[&str] = &["tabhost://", "http://tabhost.localhost", "about:blank"];

pub fn is_chrome_navigation_allowed(url: &str) -> bool {
    CHROME_NAV_PREFIXES.iter().any(|p| url.starts_with(p))
}

/// Script exposing startup settings to the chrome as `window.tabhostStartup`.
pub fn startup_script(startup: &serde_json::Value) -> String {
    let json = serde_json::to_string(startup).unwrap_or_else(|_| "{}".to_string());
    format!("window.tabhostStartup = {json};")
}

pub struct ChromeView {
    webview: WebView,
    /// Raw request bodies posted by the chrome, drained by the event loop.
    requests: Arc<Mutex<Vec<String>>>,
}

impl ChromeView {
    pub fn build<W: HasWindowHandle>(
        window: &W,
        bounds: Bounds,
        provider: ContentProvider,
        devtools: bool,
        startup: &serde_json::Value,
    ) -> Result<Self, SurfaceError> {
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let provider = Arc::new(provider);

        let ipc_requests = Arc::clone(&requests);
        let builder = WebViewBuilder::new()
            .with_bounds(bounds_to_wry(&bounds))
            .with_transparent(true)
            .with_devtools(devtools)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_initialization_script(&startup_script(startup))
            .with_ipc_handler(move |request| {
                let body = request.body().to_string();
                if !is_valid_ipc_body(&body) {
                    warn!(body_len = body.len(), "chrome IPC rejected: invalid body");
                    return;
                }
                debug!(body_len = body.len(), "chrome IPC request");
                if let Ok(mut pending) = ipc_requests.lock() {
                    pending.push(body);
                }
            })
            .with_navigation_handler(|url| {
                if is_chrome_navigation_allowed(&url) {
                    return true;
                }
                warn!(url = %url, "chrome navigation blocked");
                false
            })
            .with_custom_protocol("tabhost".to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = asset_path(&uri);
                match provider.resolve(path) {
                    Some((mime, data)) => wry::http::Response::builder()
                        .status(200)
                        .header("Content-Type", mime.as_ref())
                        .body(Cow::from(data.into_owned()))
                        .unwrap_or_else(|_| wry::http::Response::new(Cow::from(Vec::new()))),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        wry::http::Response::builder()
                            .status(404)
                            .body(Cow::from(b"Not Found".to_vec()))
                            .unwrap_or_else(|_| wry::http::Response::new(Cow::from(Vec::new())))
                    }
                }
            })
            .with_url(CHROME_URL);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| SurfaceError::Construction(e.to_string()))?;

        debug!("chrome view created");
        Ok(Self { webview, requests })
    }

    /// Drain all request bodies posted since the last call.
    pub fn drain_requests(&self) -> Vec<String> {
        match self.requests.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }

    /// Deliver a response or event to the chrome's JavaScript.
    pub fn dispatch(&self, kind: &str, payload: &serde_json::Value) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(&js_dispatch_message(kind, payload))
            .map_err(|e| SurfaceError::Engine(e.to_string()))
    }

    pub fn set_bounds(&self, bounds: Bounds) -> Result<(), SurfaceError> {
        self.webview
            .set_bounds(bounds_to_wry(&bounds))
            .map_err(|e| SurfaceError::Engine(e.to_string()))
    }

    pub fn focus(&self) -> Result<(), SurfaceError> {
        self.webview
            .focus()
            .map_err(|e| SurfaceError::Engine(e.to_string()))
    }
}
