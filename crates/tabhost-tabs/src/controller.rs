//! The tab lifecycle state machine.
//!
//! A tab moves through creating -> attached-active -> attached-inactive ->
//! closing -> gone. Only the controller mutates the registry and the
//! attachment; every command runs to completion on the event loop and
//! always produces a response. Nothing here returns `Err` to the UI:
//! failures become `success: false` and a log line.

use tabhost_common::{Bounds, SurfaceError, TabId};
use tabhost_config::TabhostConfig;
use tabhost_webview::{ContentSurface, SurfaceFactory, BLANK_URL};
use tracing::{debug, error, info, warn};

use crate::address::AddressResolver;
use crate::attachment::{Attachment, ContentHost};
use crate::layout::ChromeGeometry;
use crate::protocol::{
    AckResponse, CloseTabResponse, Command, CreateTabResponse, NavigateResponse, Request,
    Response, ResponseEnvelope, TabPatch, UiEvent,
};
use crate::registry::TabRegistry;
use crate::relay::{MetadataRelay, UiEventSink};

pub struct TabController<F: SurfaceFactory, H: ContentHost> {
    factory: F,
    host: H,
    registry: TabRegistry<F::Surface>,
    attachment: Attachment,
    geometry: ChromeGeometry,
    relay: MetadataRelay,
    resolver: AddressResolver,
    sink: Box<dyn UiEventSink>,
    /// Set by `close_all`; later commands are rejected.
    closed: bool,
}

impl<F: SurfaceFactory, H: ContentHost> TabController<F, H> {
    pub fn new(
        factory: F,
        host: H,
        resolver: AddressResolver,
        geometry: ChromeGeometry,
        sink: Box<dyn UiEventSink>,
    ) -> Self {
        Self {
            factory,
            host,
            registry: TabRegistry::new(),
            attachment: Attachment::new(),
            geometry,
            relay: MetadataRelay::new(),
            resolver,
            sink,
            closed: false,
        }
    }

    pub fn from_config(
        factory: F,
        host: H,
        config: &TabhostConfig,
        sink: Box<dyn UiEventSink>,
    ) -> Self {
        Self::new(
            factory,
            host,
            AddressResolver::from_config(&config.tabs),
            ChromeGeometry::new(config.chrome.top_height, config.chrome.side_panel_width),
            sink,
        )
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Run one command. Always returns the command's response shape.
    pub fn handle(&mut self, command: Command) -> Response {
        debug!(command = command.name(), "handling command");
        match command {
            Command::CreateTab { url } => Response::CreateTab(self.create_tab(url.as_deref())),
            Command::SwitchTab { id } => Response::Ack(self.switch_tab(&id)),
            Command::CloseTab { id } => Response::CloseTab(self.close_tab(&id)),
            Command::Navigate { url } => Response::Navigate(self.navigate(&url)),
            Command::Back => Response::Ack(self.back()),
            Command::Forward => Response::Ack(self.forward()),
            Command::Reload => Response::Ack(self.reload()),
            Command::ReportChromeHeight { height } => {
                Response::Ack(self.report_chrome_height(height))
            }
            Command::ReportSidePanelWidth { width } => {
                Response::Ack(self.report_side_panel_width(width))
            }
        }
    }

    pub fn handle_request(&mut self, request: Request) -> ResponseEnvelope {
        ResponseEnvelope {
            request_id: request.request_id,
            response: self.handle(request.command),
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Create a tab, make it active and show it before its page loads.
    pub fn create_tab(&mut self, url: Option<&str>) -> CreateTabResponse {
        let url = self.resolver.resolve(url.unwrap_or_default());
        if !self.is_live("create-tab") {
            return CreateTabResponse {
                success: false,
                id: None,
                url,
            };
        }

        let mut id = TabId::new();
        while self.registry.contains(&id) {
            id = TabId::new();
        }

        let emitter = self.relay.subscribe(&id);
        let surface = match self.factory.create(&url, emitter) {
            Ok(surface) => surface,
            Err(e) => {
                error!(tab_id = %id, url = %url, error = %e, "failed to create content surface");
                self.relay.unsubscribe(&id);
                return CreateTabResponse {
                    success: false,
                    id: None,
                    url,
                };
            }
        };

        self.registry.insert(id.clone(), surface);
        self.registry.set_active(Some(id.clone()));
        let bounds = self.current_bounds();
        self.attachment.attach(&mut self.registry, &id, bounds);

        self.sink.emit(UiEvent::TabUpdated(TabPatch {
            url: Some(url.clone()),
            is_loading: Some(true),
            ..TabPatch::new(id.clone())
        }));

        info!(tab_id = %id, url = %url, tabs = self.registry.len(), "tab created");
        CreateTabResponse {
            success: true,
            id: Some(id),
            url,
        }
    }

    /// Activate `id`. Switching to the active tab re-attaches it anyway.
    pub fn switch_tab(&mut self, id: &TabId) -> AckResponse {
        if !self.is_live("switch-tab") {
            return AckResponse { success: false };
        }
        if !self.registry.contains(id) {
            debug!(tab_id = %id, "switch to unknown tab");
            return AckResponse { success: false };
        }

        self.registry.set_active(Some(id.clone()));
        let bounds = self.current_bounds();
        self.attachment.attach(&mut self.registry, id, bounds);
        self.sink.emit(UiEvent::TabSwitched { id: id.clone() });

        info!(tab_id = %id, "tab switched");
        AckResponse { success: true }
    }

    /// Remove `id`, tear its surface down and pick a successor if it was
    /// active. Returns the active id after the close.
    pub fn close_tab(&mut self, id: &TabId) -> CloseTabResponse {
        if !self.is_live("close-tab") {
            return CloseTabResponse {
                success: false,
                next_active_id: self.registry.active().cloned(),
            };
        }

        let was_active = self.registry.active() == Some(id);
        let was_shown = self.attachment.shown() == Some(id);
        let Some(surface) = self.registry.remove(id) else {
            debug!(tab_id = %id, "close of unknown tab");
            return CloseTabResponse {
                success: false,
                next_active_id: self.registry.active().cloned(),
            };
        };

        self.relay.unsubscribe(id);
        self.attachment.forget(id);
        teardown(id, surface);

        if was_active {
            match self.registry.ids().first().cloned() {
                Some(next) => {
                    self.registry.set_active(Some(next.clone()));
                    let bounds = self.current_bounds();
                    self.attachment.attach(&mut self.registry, &next, bounds);
                    self.sink.emit(UiEvent::TabSwitched { id: next.clone() });
                    info!(tab_id = %id, next = %next, "active tab closed, successor attached");
                }
                None => {
                    self.registry.set_active(None);
                    self.attachment.detach_all(&mut self.registry);
                    info!(tab_id = %id, "last tab closed");
                }
            }
        } else {
            if was_shown {
                // The window was out of sync; put the active tab back.
                if let Some(active) = self.registry.active().cloned() {
                    let bounds = self.current_bounds();
                    self.attachment.attach(&mut self.registry, &active, bounds);
                }
            }
            info!(tab_id = %id, "inactive tab closed");
        }

        CloseTabResponse {
            success: true,
            next_active_id: self.registry.active().cloned(),
        }
    }

    /// Load `input` (normalized) in the active tab. The load is queued;
    /// progress arrives through the relay.
    pub fn navigate(&mut self, input: &str) -> NavigateResponse {
        let url = self.resolver.resolve(input);
        if !self.is_live("navigate") {
            return NavigateResponse {
                success: false,
                url,
            };
        }
        let Some(id) = self.registry.active().cloned() else {
            debug!(url = %url, "navigate with no active tab");
            return NavigateResponse {
                success: false,
                url,
            };
        };

        self.sink.emit(UiEvent::TabUpdated(TabPatch::loading(id.clone(), true)));

        let result = match self.registry.get_mut(&id) {
            Some(surface) => surface.load_url(&url),
            None => Err(SurfaceError::Destroyed),
        };
        match result {
            Ok(()) => debug!(tab_id = %id, url = %url, "load queued"),
            Err(SurfaceError::Refused(_)) => {
                warn!(tab_id = %id, url = %url, "navigation refused by policy");
                self.sink.emit(UiEvent::TabUpdated(TabPatch::loading(id, false)));
                return NavigateResponse {
                    success: false,
                    url,
                };
            }
            Err(e) => {
                warn!(tab_id = %id, url = %url, error = %e, "load request failed");
                self.sink.emit(UiEvent::TabUpdated(TabPatch::loading(id, false)));
            }
        }

        NavigateResponse { success: true, url }
    }

    pub fn back(&mut self) -> AckResponse {
        self.traverse(true)
    }

    pub fn forward(&mut self) -> AckResponse {
        self.traverse(false)
    }

    pub fn reload(&mut self) -> AckResponse {
        if !self.is_live("reload") {
            return AckResponse { success: false };
        }
        let Some(surface) = self.registry.active_surface_mut() else {
            return AckResponse { success: false };
        };
        match surface.reload() {
            Ok(()) => AckResponse { success: true },
            Err(e) => {
                warn!(error = %e, "reload failed");
                AckResponse { success: false }
            }
        }
    }

    pub fn report_chrome_height(&mut self, height: f64) -> AckResponse {
        if !self.is_live("report-chrome-height") {
            return AckResponse { success: false };
        }
        let stored = self.geometry.report_chrome_height(height);
        debug!(reported = height, stored, "chrome height reported");
        self.relayout();
        AckResponse { success: true }
    }

    pub fn report_side_panel_width(&mut self, width: f64) -> AckResponse {
        if !self.is_live("report-side-panel-width") {
            return AckResponse { success: false };
        }
        let stored = self.geometry.report_side_panel_width(width);
        debug!(reported = width, stored, "side panel width reported");
        self.relayout();
        AckResponse { success: true }
    }

    // =========================================================================
    // EVENT LOOP HOOKS
    // =========================================================================

    /// Re-apply layout after the host window changed size.
    pub fn on_window_resized(&mut self) {
        if self.host.is_alive() && !self.closed {
            self.relayout();
        }
    }

    /// Forward queued engine events to the UI.
    pub fn pump_events(&mut self) -> usize {
        self.relay.pump(&*self.sink)
    }

    /// Tear down every tab and leave the window empty. Later commands are
    /// rejected. Safe to call more than once.
    pub fn close_all(&mut self) {
        if self.closed {
            return;
        }
        let ids: Vec<TabId> = self.registry.ids().to_vec();
        let count = ids.len();
        for id in ids {
            self.relay.unsubscribe(&id);
            self.attachment.forget(&id);
            if let Some(surface) = self.registry.remove(&id) {
                teardown(&id, surface);
            }
        }
        self.registry.set_active(None);
        self.attachment.detach_all(&mut self.registry);
        self.closed = true;
        info!(count, "all tabs closed");
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn active(&self) -> Option<&TabId> {
        self.registry.active()
    }

    /// Tab ids in creation order.
    pub fn tab_ids(&self) -> &[TabId] {
        self.registry.ids()
    }

    pub fn tab_count(&self) -> usize {
        self.registry.len()
    }

    /// The tab whose surface the window shows.
    pub fn shown(&self) -> Option<&TabId> {
        self.attachment.shown()
    }

    pub fn geometry(&self) -> ChromeGeometry {
        self.geometry
    }

    pub fn current_bounds(&self) -> Bounds {
        self.geometry.bounds_for(self.host.content_size())
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn is_live(&self, command: &str) -> bool {
        if self.closed {
            debug!(command, "command after shutdown rejected");
            return false;
        }
        if !self.host.is_alive() {
            warn!(command, "host window gone, command rejected");
            return false;
        }
        true
    }

    fn relayout(&mut self) {
        let bounds = self.current_bounds();
        self.attachment.relayout(&mut self.registry, bounds);
    }

    fn traverse(&mut self, back: bool) -> AckResponse {
        let command = if back { "back" } else { "forward" };
        if !self.is_live(command) {
            return AckResponse { success: false };
        }
        let Some(surface) = self.registry.active_surface_mut() else {
            return AckResponse { success: false };
        };

        let possible = if back {
            surface.can_go_back()
        } else {
            surface.can_go_forward()
        };
        if !possible {
            debug!(command, "no history entry");
            return AckResponse { success: false };
        }

        let result = if back {
            surface.go_back()
        } else {
            surface.go_forward()
        };
        match result {
            Ok(()) => AckResponse { success: true },
            Err(e) => {
                warn!(command, error = %e, "history traversal failed");
                AckResponse { success: false }
            }
        }
    }
}

/// Best-effort teardown of a removed surface. Each step is independent;
/// failures are logged and the surface is dropped regardless.
fn teardown<S: ContentSurface>(id: &TabId, mut surface: S) {
    log_step(id, "stop media", surface.stop_media());
    log_step(id, "blank navigation", surface.load_url(BLANK_URL));
    log_step(id, "mute", surface.set_muted(true));
    log_step(id, "detach", surface.set_visible(false));
    drop(surface);
    debug!(tab_id = %id, "surface destroyed");
}

fn log_step(id: &TabId, step: &str, result: Result<(), SurfaceError>) {
    if let Err(e) = result {
        warn!(tab_id = %id, step, error = %e, "teardown step failed");
    }
}
