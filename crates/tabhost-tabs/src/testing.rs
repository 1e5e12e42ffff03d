//! In-process doubles for the engine and the host window.
//!
//! `FakeFactory` builds `FakeSurface`s that record every call, can be told
//! to fail individual steps or to ignore "show" requests, and keep their
//! event emitter so tests can play the engine's part.
//!
//! Compiled for this crate's tests and behind the `testing` feature.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tabhost_common::{Bounds, Size, SurfaceError, TabId};
use tabhost_webview::{
    is_navigation_allowed, CapabilityProfile, ContentSurface, NavHistory, SurfaceEmitter,
    SurfaceEvent, SurfaceFactory, BLANK_URL,
};

use crate::attachment::ContentHost;
use crate::protocol::UiEvent;
use crate::relay::UiEventSink;

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Load(String),
    Back,
    Forward,
    Reload,
    StopMedia,
    SetMuted(bool),
    SetBounds(Bounds),
    SetVisible(bool),
    Focus,
}

/// Engine operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Load,
    Back,
    Forward,
    Reload,
    StopMedia,
    SetMuted,
    SetBounds,
    SetVisible,
    Focus,
}

#[derive(Default)]
struct FakeSurfaceState {
    calls: Vec<SurfaceCall>,
    visible: bool,
    bounds: Option<Bounds>,
    muted: bool,
    dropped: bool,
    history: NavHistory,
    failing: Vec<Step>,
    ignored_shows: u32,
    isolated: bool,
}

impl FakeSurfaceState {
    fn check(&self, step: Step) -> Result<(), SurfaceError> {
        if self.dropped {
            return Err(SurfaceError::Destroyed);
        }
        if self.failing.contains(&step) {
            return Err(SurfaceError::Engine(format!("injected {step:?} failure")));
        }
        Ok(())
    }
}

type Shared = Rc<RefCell<FakeSurfaceState>>;

pub struct FakeSurface {
    state: Shared,
}

impl FakeSurface {
    fn record(&self, call: SurfaceCall, step: Step) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        state.check(step)
    }
}

impl ContentSurface for FakeSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Load(url.to_string()), Step::Load)?;
        let mut state = self.state.borrow_mut();
        if state.isolated && !is_navigation_allowed(url) {
            return Err(SurfaceError::Refused(url.to_string()));
        }
        state.history.on_load_started(url);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.state.borrow().history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.state.borrow().history.can_go_forward()
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Back, Step::Back)?;
        let mut state = self.state.borrow_mut();
        if let Some(url) = state.history.go_back() {
            state.history.on_load_started(&url);
        }
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Forward, Step::Forward)?;
        let mut state = self.state.borrow_mut();
        if let Some(url) = state.history.go_forward() {
            state.history.on_load_started(&url);
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Reload, Step::Reload)
    }

    fn stop_media(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::StopMedia, Step::StopMedia)
    }

    fn set_muted(&mut self, muted: bool) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::SetMuted(muted), Step::SetMuted)?;
        self.state.borrow_mut().muted = muted;
        Ok(())
    }

    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::SetBounds(bounds), Step::SetBounds)?;
        self.state.borrow_mut().bounds = Some(bounds);
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::SetVisible(visible), Step::SetVisible)?;
        let mut state = self.state.borrow_mut();
        if visible && state.ignored_shows > 0 {
            // Silent no-op, like a misbehaving embedding API.
            state.ignored_shows -= 1;
            return Ok(());
        }
        state.visible = visible;
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Focus, Step::Focus)
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.dropped = true;
        // A destroyed view is no longer on screen.
        state.visible = false;
    }
}

/// Test-side view of one created surface.
#[derive(Clone)]
pub struct FakeHandle {
    tab_id: TabId,
    initial_url: String,
    emitter: SurfaceEmitter,
    state: Shared,
}

impl FakeHandle {
    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    pub fn initial_url(&self) -> &str {
        &self.initial_url
    }

    /// Play the engine: queue an event as if the page reported it.
    pub fn emit(&self, event: SurfaceEvent) -> bool {
        self.emitter.emit(event)
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.state.borrow().bounds
    }

    pub fn is_muted(&self) -> bool {
        self.state.borrow().muted
    }

    pub fn is_dropped(&self) -> bool {
        self.state.borrow().dropped
    }

    pub fn fail(&self, step: Step) {
        self.state.borrow_mut().failing.push(step);
    }

    /// Make the next `count` show requests report success without
    /// changing visibility.
    pub fn ignore_show(&self, count: u32) {
        self.state.borrow_mut().ignored_shows = count;
    }

    /// Make the surface visible behind the controller's back.
    pub fn force_visible(&self) {
        self.state.borrow_mut().visible = true;
    }
}

/// Snapshot of every surface a `FakeFactory` has built.
pub struct FakeSurfaces {
    handles: Vec<FakeHandle>,
}

impl FakeSurfaces {
    pub fn get(&self, id: &TabId) -> Option<FakeHandle> {
        self.handles.iter().find(|h| &h.tab_id == id).cloned()
    }

    pub fn all(&self) -> &[FakeHandle] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Ids of surfaces currently on screen.
    pub fn visible(&self) -> Vec<TabId> {
        self.handles
            .iter()
            .filter(|h| h.is_visible())
            .map(|h| h.tab_id.clone())
            .collect()
    }
}

/// Shared-state factory: clones observe the same surfaces.
#[derive(Clone, Default)]
pub struct FakeFactory {
    profile: CapabilityProfile,
    created: Rc<RefCell<Vec<FakeHandle>>>,
    fail_next: Rc<Cell<bool>>,
}

impl FakeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surfaces(&self) -> FakeSurfaces {
        FakeSurfaces {
            handles: self.created.borrow().clone(),
        }
    }

    /// Make the next `create` fail as if the engine refused to build a view.
    pub fn fail_next_create(&self) {
        self.fail_next.set(true);
    }
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    fn create(&mut self, url: &str, emitter: SurfaceEmitter) -> Result<FakeSurface, SurfaceError> {
        if self.fail_next.replace(false) {
            return Err(SurfaceError::Construction("injected create failure".into()));
        }
        let mut state = FakeSurfaceState {
            isolated: self.profile.isolated_origins,
            ..FakeSurfaceState::default()
        };
        let refused = state.isolated && !is_navigation_allowed(url);
        state
            .history
            .on_load_started(if refused { BLANK_URL } else { url });
        let state = Rc::new(RefCell::new(state));
        if refused {
            emitter.emit(SurfaceEvent::LoadStopped);
        }
        self.created.borrow_mut().push(FakeHandle {
            tab_id: emitter.tab_id().clone(),
            initial_url: url.to_string(),
            emitter,
            state: Rc::clone(&state),
        });
        Ok(FakeSurface { state })
    }
}

/// Host window with a settable size that can be "destroyed".
#[derive(Clone)]
pub struct FakeHost {
    size: Rc<Cell<Size>>,
    alive: Rc<Cell<bool>>,
}

impl FakeHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Rc::new(Cell::new(Size::new(width, height))),
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.size.set(Size::new(width, height));
    }

    pub fn destroy(&self) {
        self.alive.set(false);
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

impl ContentHost for FakeHost {
    fn content_size(&self) -> Size {
        self.size.get()
    }

    fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

/// Records every UI event the controller emits.
#[derive(Clone, Default)]
pub struct CollectingSink {
    events: Rc<RefCell<Vec<UiEvent>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything collected so far.
    pub fn take(&self) -> Vec<UiEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn snapshot(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }
}

impl UiEventSink for CollectingSink {
    fn emit(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}
