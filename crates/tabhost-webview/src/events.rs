//! Engine event types and the queue that carries them to the event loop.
//!
//! Engine callbacks fire outside the control flow of any command, so each
//! surface gets a `SurfaceEmitter` that pushes tagged events into a shared
//! queue. The event loop drains the queue and hands events to the relay.
//! Every emitter is paired with a `Subscription`; once the subscription is
//! disposed (or dropped), late events from that surface are discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tabhost_common::TabId;
use tracing::debug;

/// Something the rendering engine reported about one surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    TitleChanged(String),
    FaviconChanged(String),
    /// The committed URL changed.
    Navigated(String),
    LoadStarted,
    LoadStopped,
}

/// A `SurfaceEvent` addressed to the tab that owns the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEvent {
    pub tab_id: TabId,
    pub event: SurfaceEvent,
}

type Queue = Arc<Mutex<Vec<TaggedEvent>>>;

/// Shared sink for engine events from every surface.
#[derive(Clone, Default)]
pub struct SurfaceEventQueue {
    events: Queue,
}

impl SurfaceEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a subscription for `tab_id`. The emitter goes to the surface's
    /// engine callbacks; the subscription stays with the relay.
    pub fn subscribe(&self, tab_id: &TabId) -> (SurfaceEmitter, Subscription) {
        let live = Arc::new(AtomicBool::new(true));
        let emitter = SurfaceEmitter {
            tab_id: tab_id.clone(),
            events: Arc::clone(&self.events),
            live: Arc::clone(&live),
        };
        let subscription = Subscription {
            tab_id: tab_id.clone(),
            live,
        };
        (emitter, subscription)
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&self) -> Vec<TaggedEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Engine-side half of a subscription. Cheap to clone into each callback.
#[derive(Clone)]
pub struct SurfaceEmitter {
    tab_id: TabId,
    events: Queue,
    live: Arc<AtomicBool>,
}

impl SurfaceEmitter {
    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    /// Queue an event. Returns `false` if the subscription was disposed.
    pub fn emit(&self, event: SurfaceEvent) -> bool {
        if !self.live.load(Ordering::Acquire) {
            debug!(tab_id = %self.tab_id, ?event, "dropping event from disposed surface");
            return false;
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(TaggedEvent {
                tab_id: self.tab_id.clone(),
                event,
            });
        }
        true
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

/// Disposable handle for one surface's event stream.
pub struct Subscription {
    tab_id: TabId,
    live: Arc<AtomicBool>,
}

impl Subscription {
    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    pub fn dispose(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.live.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitted_events_are_tagged_and_drained_in_order() {
        let queue = SurfaceEventQueue::new();
        let a = TabId::from("tab-a");
        let b = TabId::from("tab-b");
        let (emit_a, _sub_a) = queue.subscribe(&a);
        let (emit_b, _sub_b) = queue.subscribe(&b);

        emit_a.emit(SurfaceEvent::LoadStarted);
        emit_b.emit(SurfaceEvent::TitleChanged("B".into()));
        emit_a.emit(SurfaceEvent::LoadStopped);

        let drained = queue.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0].tab_id, a);
        assert_eq!(drained[1].tab_id, b);
        assert_eq!(drained[1].event, SurfaceEvent::TitleChanged("B".into()));
        assert_eq!(drained[2].event, SurfaceEvent::LoadStopped);
        assert!(queue.is_empty());
    }

    #[test]
    fn disposed_subscription_silences_emitter() {
        let queue = SurfaceEventQueue::new();
        let (emitter, sub) = queue.subscribe(&TabId::from("tab-x"));

        assert!(emitter.emit(SurfaceEvent::LoadStarted));
        sub.dispose();
        assert!(!emitter.is_live());
        assert!(!emitter.emit(SurfaceEvent::LoadStopped));

        assert_eq!(queue.drain().len(), 1);
    }

    #[test]
    fn dropping_subscription_also_disposes() {
        let queue = SurfaceEventQueue::new();
        let (emitter, sub) = queue.subscribe(&TabId::from("tab-y"));
        drop(sub);
        assert!(!emitter.emit(SurfaceEvent::Navigated("https://y".into())));
        assert!(queue.is_empty());
    }

    #[test]
    fn cloned_emitters_share_liveness() {
        let queue = SurfaceEventQueue::new();
        let (emitter, sub) = queue.subscribe(&TabId::from("tab-z"));
        let clone = emitter.clone();
        drop(sub);
        assert!(!clone.is_live());
    }
}
