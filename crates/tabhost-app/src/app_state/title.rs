//! Window title management: follows the active tab's title.

use tabhost_tabs::UiMirror;

use super::core::TabhostApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

/// Format: "{tab title} - {app title}", or just the app title.
pub(super) fn window_title(base: &str, mirror: &UiMirror) -> String {
    match mirror.active_tab() {
        Some(tab) if !tab.title.trim().is_empty() => format!("{} - {base}", tab.title.trim()),
        _ => base.to_string(),
    }
}

impl TabhostApp {
    /// Update the window title if the active tab's title changed.
    pub(super) fn update_window_title(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };

        let title = window_title(&self.config.window.title, &self.mirror);
        if title != self.last_title {
            window.set_title(&title);
            self.last_title = title;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::TabhostApp;
    use tabhost_common::TabId;
    use tabhost_config::{LastTabPolicy, TabhostConfig};
    use tabhost_tabs::{CreateTabResponse, TabPatch, UiEvent};

    #[test]
    fn title_follows_active_tab() {
        let mut mirror = UiMirror::new(LastTabPolicy::NewTab);
        assert_eq!(window_title("Tabhost", &mirror), "Tabhost");

        let id = TabId::from("tab-1");
        mirror.apply_create_response(&CreateTabResponse {
            success: true,
            id: Some(id.clone()),
            url: "https://x".into(),
        });
        assert_eq!(window_title("Tabhost", &mirror), "Tabhost");

        mirror.apply_event(&UiEvent::TabUpdated(TabPatch {
            title: Some("Docs".into()),
            ..TabPatch::new(id)
        }));
        assert_eq!(window_title("Tabhost", &mirror), "Docs - Tabhost");
    }

    #[test]
    fn update_title_without_window_does_not_panic() {
        let mut app = TabhostApp::new(TabhostConfig::default(), None, None);
        app.update_window_title();
        assert!(app.last_title.is_empty());
    }
}
