//! TabhostApp struct definition and constructor.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;
use winit::window::Window;

use tabhost_common::EventBus;
use tabhost_config::TabhostConfig;
use tabhost_tabs::{UiEvent, UiMirror};
use tabhost_webview::ChromeView;

use super::types::{AppTabs, EVENT_BUS_CAPACITY};

/// Top-level application state.
pub struct TabhostApp {
    pub(super) config: TabhostConfig,
    /// URL or search terms for the first tab, from the command line.
    pub(super) startup_url: Option<String>,
    /// Developer override for the bundled chrome assets.
    pub(super) assets_dir: Option<PathBuf>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) window_alive: Option<Rc<Cell<bool>>>,

    // The chrome (tab strip + navigation bar) and the tab core
    pub(super) chrome: Option<ChromeView>,
    pub(super) tabs: Option<AppTabs>,

    // UI events fan out to the chrome and to our own mirror
    pub(super) event_bus: EventBus<UiEvent>,
    pub(super) chrome_rx: broadcast::Receiver<UiEvent>,
    pub(super) mirror_rx: broadcast::Receiver<UiEvent>,
    pub(super) mirror: UiMirror,
    pub(super) last_title: String,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl TabhostApp {
    pub fn new(
        config: TabhostConfig,
        startup_url: Option<String>,
        assets_dir: Option<PathBuf>,
    ) -> Self {
        let event_bus = EventBus::new(EVENT_BUS_CAPACITY);
        let chrome_rx = event_bus.subscribe();
        let mirror_rx = event_bus.subscribe();
        let mirror = UiMirror::new(config.tabs.on_last_tab_closed);
        Self {
            config,
            startup_url,
            assets_dir,
            window: None,
            window_alive: None,
            chrome: None,
            tabs: None,
            event_bus,
            chrome_rx,
            mirror_rx,
            mirror,
            last_title: String::new(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
