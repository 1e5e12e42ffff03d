use tokio::sync::broadcast;

/// Fan-out channel for events flowing from the control side to any number
/// of listeners (the chrome webview, the window title mirror, tests).
pub struct EventBus<T: Clone> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> EventBus<T> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: T) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl<T: Clone> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish("tab-switched".to_string());

        let event = rx.recv().await.unwrap();
        assert_eq!(event, "tab-switched");
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(7u32);

        assert_eq!(rx1.recv().await.unwrap(), 7);
        assert_eq!(rx2.recv().await.unwrap(), 7);
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus: EventBus<u32> = EventBus::new(16);
        assert_eq!(bus.publish(1), 0);
    }

    #[test]
    fn try_recv_from_sync_code() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        bus.publish(1u8);
        bus.publish(2u8);
        assert_eq!(rx.try_recv().unwrap(), 1);
        assert_eq!(rx.try_recv().unwrap(), 2);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn cloned_bus_shares_subscribers() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        let clone = bus.clone();
        assert_eq!(clone.publish(9i32), 1);
        assert_eq!(rx.try_recv().unwrap(), 9);
    }
}
