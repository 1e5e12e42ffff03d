//! Internal types and constants for the app state module.

use std::time::Duration;

use tabhost_tabs::TabController;
use tabhost_webview::WrySurfaceFactory;
use winit::window::Window;

use super::host::WinitHost;

/// How often to poll chrome requests and engine events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Capacity of the UI event bus. Slow receivers skip ahead.
pub(super) const EVENT_BUS_CAPACITY: usize = 256;

pub(super) type AppTabs = TabController<WrySurfaceFactory<Window>, WinitHost>;
