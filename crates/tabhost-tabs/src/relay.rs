//! Engine events -> sparse `tab-updated` patches for the UI.

use std::collections::HashMap;

use tabhost_common::{EventBus, TabId};
use tabhost_webview::{Subscription, SurfaceEmitter, SurfaceEvent, SurfaceEventQueue, TaggedEvent};
use tracing::debug;

use crate::protocol::{TabPatch, UiEvent};

/// Where the controller sends events bound for the UI.
pub trait UiEventSink {
    fn emit(&self, event: UiEvent);
}

impl UiEventSink for EventBus<UiEvent> {
    fn emit(&self, event: UiEvent) {
        let receivers = self.publish(event);
        if receivers == 0 {
            debug!("ui event published with no listeners");
        }
    }
}

/// Owns every surface's event subscription and translates drained engine
/// events into UI events.
#[derive(Default)]
pub struct MetadataRelay {
    queue: SurfaceEventQueue,
    subscriptions: HashMap<TabId, Subscription>,
}

impl MetadataRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a subscription for `id`. The returned emitter goes to the
    /// surface factory.
    pub fn subscribe(&mut self, id: &TabId) -> SurfaceEmitter {
        let (emitter, subscription) = self.queue.subscribe(id);
        self.subscriptions.insert(id.clone(), subscription);
        emitter
    }

    /// Dispose `id`'s subscription. Events it emits afterwards are dropped.
    pub fn unsubscribe(&mut self, id: &TabId) {
        if let Some(subscription) = self.subscriptions.remove(id) {
            subscription.dispose();
        }
    }

    pub fn is_subscribed(&self, id: &TabId) -> bool {
        self.subscriptions.contains_key(id)
    }

    /// Forward every queued engine event to `sink`. Returns how many UI
    /// events were emitted.
    pub fn pump(&mut self, sink: &dyn UiEventSink) -> usize {
        let mut forwarded = 0;
        for TaggedEvent { tab_id, event } in self.queue.drain() {
            // Queued before the tab closed.
            if !self.subscriptions.contains_key(&tab_id) {
                debug!(tab_id = %tab_id, ?event, "dropping event for closed tab");
                continue;
            }
            sink.emit(UiEvent::TabUpdated(to_patch(tab_id, event)));
            forwarded += 1;
        }
        forwarded
    }
}

/// One engine event becomes one patch carrying only the changed field.
pub fn to_patch(id: TabId, event: SurfaceEvent) -> TabPatch {
    let mut patch = TabPatch::new(id);
    match event {
        SurfaceEvent::TitleChanged(title) => patch.title = Some(title),
        SurfaceEvent::FaviconChanged(favicon) => patch.favicon = Some(favicon),
        SurfaceEvent::Navigated(url) => patch.url = Some(url),
        SurfaceEvent::LoadStarted => patch.is_loading = Some(true),
        SurfaceEvent::LoadStopped => patch.is_loading = Some(false),
    }
    patch
}
