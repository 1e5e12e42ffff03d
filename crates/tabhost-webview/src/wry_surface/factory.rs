use std::sync::{Arc, Mutex};

use tabhost_common::{Bounds, SurfaceError};
use tracing::{debug, warn};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebContext, WebViewBuilder};

use crate::bounds::bounds_to_wry;
use crate::events::{SurfaceEmitter, SurfaceEvent};
use crate::factory::SurfaceFactory;
use crate::history::NavHistory;
use crate::surface::{is_navigation_allowed, CapabilityProfile, BLANK_URL};

use super::{handlers, scripts, WrySurface};

/// Builds content tabs as hidden child webviews of the host window.
pub struct WrySurfaceFactory<W: HasWindowHandle> {
    window: Arc<W>,
    profile: CapabilityProfile,
    /// Network/storage partition shared by every tab.
    web_context: WebContext,
}

impl<W: HasWindowHandle> WrySurfaceFactory<W> {
    pub fn new(window: Arc<W>, profile: CapabilityProfile, data_directory: Option<String>) -> Self {
        Self {
            window,
            profile,
            web_context: WebContext::new(data_directory.map(Into::into)),
        }
    }
}

impl<W: HasWindowHandle> SurfaceFactory for WrySurfaceFactory<W> {
    type Surface = WrySurface;

    fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    fn create(&mut self, url: &str, emitter: SurfaceEmitter) -> Result<WrySurface, SurfaceError> {
        let tab_id = emitter.tab_id().clone();
        let history = Arc::new(Mutex::new(NavHistory::new()));
        let profile = &self.profile;

        let mut builder = if profile.shared_partition {
            WebViewBuilder::with_web_context(&mut self.web_context)
        } else {
            WebViewBuilder::new().with_incognito(true)
        };

        // Hidden until the attachment controller shows it.
        builder = builder
            .with_bounds(bounds_to_wry(&Bounds::default()))
            .with_visible(false)
            .with_focused(false)
            .with_devtools(profile.devtools)
            .with_autoplay(profile.autoplay)
            .with_clipboard(!profile.isolated_origins)
            .with_initialization_script(scripts::AUDIO_TRACKING_SCRIPT);

        if let Some(ua) = &profile.user_agent {
            builder = builder.with_user_agent(ua);
        }
        if profile.host_integration {
            warn!(tab_id = %tab_id, "host integration is not offered to content tabs");
        }

        builder = handlers::attach_page_load_handler(builder, emitter.clone(), Arc::clone(&history));
        builder = handlers::attach_title_handler(builder, emitter.clone());
        builder = handlers::attach_navigation_handler(builder, tab_id.clone(), profile.isolated_origins);

        // A refused URL is reported the same way the engine reports a failed
        // load: asynchronously, as a stop without a URL change.
        let refused = profile.isolated_origins && !is_navigation_allowed(url);
        builder = builder.with_url(if refused { BLANK_URL } else { url });

        let webview = builder
            .build_as_child(self.window.as_ref())
            .map_err(|e| SurfaceError::Construction(e.to_string()))?;

        if refused {
            warn!(tab_id = %tab_id, url = %url, "initial URL refused by navigation policy");
            emitter.emit(SurfaceEvent::LoadStopped);
        }

        debug!(tab_id = %tab_id, url = %url, "content surface created");

        Ok(WrySurface {
            webview,
            tab_id,
            history,
            visible: false,
            isolated: profile.isolated_origins,
        })
    }
}
