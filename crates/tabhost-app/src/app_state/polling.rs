//! Polling of chrome requests, engine events and the UI event bus.

use std::time::Instant;

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use tabhost_tabs::UiEvent;

use super::core::TabhostApp;
use super::types::POLL_INTERVAL;

impl TabhostApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_chrome_requests();
            self.poll_engine_events();
            self.forward_ui_events();
            self.update_window_title();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Move queued engine events onto the UI event bus.
    fn poll_engine_events(&mut self) {
        if let Some(tabs) = &mut self.tabs {
            let forwarded = tabs.pump_events();
            if forwarded > 0 {
                tracing::trace!(forwarded, "Engine events relayed");
            }
        }
    }

    /// Deliver bus events to the chrome and to the app's mirror.
    fn forward_ui_events(&mut self) {
        for event in drain(&mut self.chrome_rx, "chrome") {
            let Some(chrome) = &self.chrome else {
                continue;
            };
            if let Err(e) = chrome.dispatch(event.kind(), &event.payload()) {
                tracing::warn!(error = %e, kind = event.kind(), "Failed to deliver event to chrome");
            }
        }
        for event in drain(&mut self.mirror_rx, "mirror") {
            self.mirror.apply_event(&event);
        }
    }
}

/// Everything currently buffered on `rx`. A lagging receiver skips the
/// overwritten events and carries on.
fn drain(rx: &mut Receiver<UiEvent>, name: &str) -> Vec<UiEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(receiver = name, skipped, "UI event receiver lagged");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabhost_common::{EventBus, TabId};

    #[test]
    fn drain_collects_in_order() {
        let bus: EventBus<UiEvent> = EventBus::new(8);
        let mut rx = bus.subscribe();
        bus.publish(UiEvent::TabSwitched { id: TabId::from("a") });
        bus.publish(UiEvent::TabSwitched { id: TabId::from("b") });

        let events = drain(&mut rx, "test");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].tab_id(), &TabId::from("b"));
        assert!(drain(&mut rx, "test").is_empty());
    }

    #[test]
    fn drain_survives_lag() {
        let bus: EventBus<UiEvent> = EventBus::new(2);
        let mut rx = bus.subscribe();
        for i in 0..5 {
            bus.publish(UiEvent::TabSwitched {
                id: TabId::from(format!("tab-{i}")),
            });
        }
        let events = drain(&mut rx, "test");
        assert_eq!(events.last().map(|e| e.tab_id().clone()), Some(TabId::from("tab-4")));
    }
}
