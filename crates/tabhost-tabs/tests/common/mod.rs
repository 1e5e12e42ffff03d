#![allow(dead_code)]

use tabhost_common::TabId;
use tabhost_config::LastTabPolicy;
use tabhost_tabs::testing::{CollectingSink, FakeFactory, FakeHost};
use tabhost_tabs::{AddressResolver, ChromeGeometry, TabController, UiMirror};

pub type Controller = TabController<FakeFactory, FakeHost>;

/// Controller, its fakes and a UI mirror wired the way the app wires them.
pub struct Shell {
    pub ctl: Controller,
    pub factory: FakeFactory,
    pub host: FakeHost,
    pub sink: CollectingSink,
    pub mirror: UiMirror,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_policy(LastTabPolicy::NewTab)
    }

    pub fn with_policy(policy: LastTabPolicy) -> Self {
        let factory = FakeFactory::new();
        let host = FakeHost::new(1200.0, 800.0);
        let sink = CollectingSink::new();
        let ctl = TabController::new(
            factory.clone(),
            host.clone(),
            AddressResolver::new("https://home.example", "https://search.example/?q={query}"),
            ChromeGeometry::new(80, 0),
            Box::new(sink.clone()),
        );
        Self {
            ctl,
            factory,
            host,
            sink,
            mirror: UiMirror::new(policy),
        }
    }

    /// Create a tab the way the UI does: command, then apply the response.
    pub fn open(&mut self, url: &str) -> TabId {
        let response = self.ctl.create_tab(Some(url));
        self.mirror.apply_create_response(&response);
        response.id.expect("create-tab failed")
    }

    /// Deliver every pending UI event to the mirror in emission order.
    pub fn deliver(&mut self) {
        self.ctl.pump_events();
        for event in self.sink.take() {
            self.mirror.apply_event(&event);
        }
    }

    /// Tabs whose surfaces are on screen.
    pub fn visible(&self) -> Vec<TabId> {
        self.factory.surfaces().visible()
    }

    /// The window shows exactly the active tab's surface, or nothing.
    pub fn assert_in_sync(&self) {
        match self.ctl.active() {
            Some(active) => {
                assert!(self.ctl.tab_ids().contains(active), "active id not registered");
                assert_eq!(self.visible(), vec![active.clone()]);
                assert_eq!(self.ctl.shown(), Some(active));
            }
            None => {
                assert!(self.visible().is_empty(), "surface shown with no active tab");
                assert_eq!(self.ctl.shown(), None);
            }
        }
    }
}
