//! Window creation, chrome view and tab controller setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use tabhost_common::Bounds;
use tabhost_tabs::TabController;
use tabhost_webview::{CapabilityProfile, ChromeView, ContentProvider, WrySurfaceFactory};

use super::core::TabhostApp;
use super::host::WinitHost;

// =============================================================================
// BUNDLED CHROME
// =============================================================================

const CHROME_INDEX: &str = include_str!("../../assets/chrome/index.html");
const CHROME_SCRIPT: &str = include_str!("../../assets/chrome/app.js");
const CHROME_STYLE: &str = include_str!("../../assets/chrome/style.css");

fn chrome_provider(assets_dir: Option<&std::path::Path>) -> ContentProvider {
    let mut provider = ContentProvider::new();
    provider.add_bundled("chrome/index.html", "text/html", CHROME_INDEX);
    provider.add_bundled("chrome/app.js", "application/javascript", CHROME_SCRIPT);
    provider.add_bundled("chrome/style.css", "text/css", CHROME_STYLE);
    match assets_dir {
        Some(dir) => {
            if !dir.is_dir() {
                tracing::warn!(path = %dir.display(), "Assets directory not found, using bundled chrome");
            }
            provider.with_base_dir(dir)
        }
        None => provider,
    }
}

// =============================================================================
// INITIALIZATION
// =============================================================================

impl TabhostApp {
    /// Create the window, the chrome view and the tab controller.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.min_width as f64,
                self.config.window.min_height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let (host, alive) = WinitHost::new(Arc::clone(&window));

        // The chrome fills the window; content surfaces are layered over the
        // region left of the side panel and below the top chrome.
        let provider = chrome_provider(self.assets_dir.as_deref());
        let startup = serde_json::json!({
            "startupUrl": self.startup_url,
            "onLastTabClosed": self.config.tabs.on_last_tab_closed,
        });
        let chrome = match ChromeView::build(
            window.as_ref(),
            self.chrome_bounds(&window),
            provider,
            self.config.surface.devtools,
            &startup,
        ) {
            Ok(chrome) => chrome,
            Err(e) => {
                tracing::error!("Failed to create chrome view: {e}");
                return false;
            }
        };

        let profile = CapabilityProfile::content()
            .with_devtools(self.config.surface.devtools)
            .with_autoplay(self.config.surface.autoplay)
            .with_user_agent(self.config.surface.user_agent.clone());
        let factory = WrySurfaceFactory::new(
            Arc::clone(&window),
            profile,
            self.config.surface.data_directory.clone(),
        );

        let tabs = TabController::from_config(
            factory,
            host,
            &self.config,
            Box::new(self.event_bus.clone()),
        );

        self.chrome = Some(chrome);
        self.tabs = Some(tabs);
        self.window_alive = Some(alive);
        self.window = Some(window);
        tracing::info!("Window, chrome and tab controller initialized");
        true
    }

    /// The chrome view covers the whole content area.
    pub(super) fn chrome_bounds(&self, window: &winit::window::Window) -> Bounds {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Bounds {
            x: 0,
            y: 0,
            width: size.width.max(0.0) as u32,
            height: size.height.max(0.0) as u32,
        }
    }
}
