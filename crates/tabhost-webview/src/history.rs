//! Per-surface navigation history.
//!
//! The engine does not expose back/forward availability, so each surface
//! records committed loads itself. Traversals move a cursor instead of
//! pushing, and reloading the current entry changes nothing.

#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<String>,
    index: usize,
    /// Target of a back/forward traversal whose load has not started yet.
    pending: Option<String>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a load for `url`.
    pub fn on_load_started(&mut self, url: &str) {
        if let Some(target) = self.pending.take() {
            if target == url {
                return;
            }
        }
        if self.current() == Some(url) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Move the cursor back. Returns the entry the engine should load.
    pub fn go_back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        let target = self.entries[self.index].clone();
        self.pending = Some(target.clone());
        Some(target)
    }

    /// Move the cursor forward. Returns the entry the engine should load.
    pub fn go_forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        let target = self.entries[self.index].clone();
        self.pending = Some(target.clone());
        Some(target)
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_history_cannot_traverse() {
        let mut h = NavHistory::new();
        assert!(!h.can_go_back());
        assert!(!h.can_go_forward());
        assert_eq!(h.go_back(), None);
        assert_eq!(h.go_forward(), None);
        assert_eq!(h.current(), None);
    }

    #[test]
    fn loads_push_entries() {
        let mut h = NavHistory::new();
        h.on_load_started("https://a");
        h.on_load_started("https://b");
        assert_eq!(h.len(), 2);
        assert_eq!(h.current(), Some("https://b"));
        assert!(h.can_go_back());
        assert!(!h.can_go_forward());
    }

    #[test]
    fn reload_does_not_push() {
        let mut h = NavHistory::new();
        h.on_load_started("https://a");
        h.on_load_started("https://a");
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn back_then_forward_moves_cursor_without_pushing() {
        let mut h = NavHistory::new();
        h.on_load_started("https://a");
        h.on_load_started("https://b");

        assert_eq!(h.go_back().as_deref(), Some("https://a"));
        h.on_load_started("https://a");
        assert_eq!(h.len(), 2);
        assert!(h.can_go_forward());

        assert_eq!(h.go_forward().as_deref(), Some("https://b"));
        h.on_load_started("https://b");
        assert_eq!(h.len(), 2);
        assert_eq!(h.current(), Some("https://b"));
    }

    #[test]
    fn new_load_after_back_discards_forward_entries() {
        let mut h = NavHistory::new();
        h.on_load_started("https://a");
        h.on_load_started("https://b");
        h.on_load_started("https://c");

        h.go_back();
        h.on_load_started("https://b");
        h.on_load_started("https://d");

        assert_eq!(h.len(), 3);
        assert_eq!(h.current(), Some("https://d"));
        assert!(!h.can_go_forward());
    }

    #[test]
    fn redirect_during_traversal_is_recorded() {
        let mut h = NavHistory::new();
        h.on_load_started("https://a");
        h.on_load_started("https://b");
        h.go_back();
        // The page redirected instead of landing on the traversal target.
        h.on_load_started("https://a/login");
        assert_eq!(h.current(), Some("https://a/login"));
        assert_eq!(h.len(), 2);
    }
}
