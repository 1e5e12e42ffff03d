//! The UI's copy of the tab list.
//!
//! Updated from two directions that may interleave arbitrarily: command
//! responses (optimistic path) and pushed events (event path). Every
//! update is an idempotent merge by id, last write wins per field, and
//! updates for ids the mirror does not know are dropped.

use tabhost_common::TabId;
use tabhost_config::LastTabPolicy;
use tracing::debug;

use crate::protocol::{AckResponse, CloseTabResponse, CreateTabResponse, NavigateResponse, UiEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTab {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub is_active: bool,
    pub is_loading: bool,
}

impl MirrorTab {
    fn new(id: TabId, url: String) -> Self {
        Self {
            id,
            title: String::new(),
            url,
            favicon: None,
            is_active: false,
            is_loading: true,
        }
    }
}

/// What the UI should do after applying a close response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAction {
    None,
    /// The last tab closed; open a replacement.
    CreateTab,
    /// The last tab closed; show the empty state.
    ShowEmpty,
}

#[derive(Debug, Clone, Default)]
pub struct UiMirror {
    tabs: Vec<MirrorTab>,
    active: Option<TabId>,
    policy: LastTabPolicy,
    /// Optimistic switch awaiting its response: (target, previous active).
    pending_switch: Option<(TabId, Option<TabId>)>,
}

impl UiMirror {
    pub fn new(policy: LastTabPolicy) -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            policy,
            pending_switch: None,
        }
    }

    // =========================================================================
    // OPTIMISTIC PATH
    // =========================================================================

    pub fn apply_create_response(&mut self, response: &CreateTabResponse) {
        let Some(id) = response.id.as_ref().filter(|_| response.success) else {
            return;
        };
        match self.get_mut(id) {
            Some(tab) => tab.url = response.url.clone(),
            None => self.tabs.push(MirrorTab::new(id.clone(), response.url.clone())),
        }
        self.set_active(Some(id.clone()));
    }

    /// Mark `id` active before the switch response arrives.
    pub fn select_optimistic(&mut self, id: &TabId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.pending_switch = Some((id.clone(), self.active.clone()));
        self.set_active(Some(id.clone()));
        true
    }

    /// A failed switch undoes its own optimistic selection, unless
    /// something else has moved the selection since.
    pub fn apply_switch_response(&mut self, id: &TabId, response: &AckResponse) {
        let ours = matches!(&self.pending_switch, Some((target, _)) if target == id);
        let pending = if ours {
            self.pending_switch.take().map(|(_, previous)| previous)
        } else {
            None
        };

        if response.success {
            if self.get(id).is_some() {
                self.set_active(Some(id.clone()));
            }
            return;
        }
        if let Some(previous) = pending {
            if self.active.as_ref() == Some(id) {
                debug!(tab_id = %id, "switch refused, restoring previous selection");
                let previous = previous.filter(|p| self.get(p).is_some());
                self.set_active(previous);
            }
        }
    }

    /// Drop the closed tab and adopt the successor the core picked. A
    /// refused close means the core still holds the tab.
    pub fn apply_close_response(
        &mut self,
        closed: &TabId,
        response: &CloseTabResponse,
    ) -> MirrorAction {
        if !response.success {
            return MirrorAction::None;
        }
        self.tabs.retain(|tab| &tab.id != closed);

        let next = response
            .next_active_id
            .as_ref()
            .filter(|id| self.get(id).is_some())
            .cloned();
        self.set_active(next);

        if self.tabs.is_empty() && self.active.is_none() {
            return match self.policy {
                LastTabPolicy::NewTab => MirrorAction::CreateTab,
                LastTabPolicy::Empty => MirrorAction::ShowEmpty,
            };
        }
        MirrorAction::None
    }

    pub fn apply_navigate_response(&mut self, response: &NavigateResponse) {
        if !response.success {
            return;
        }
        let Some(id) = self.active.clone() else {
            return;
        };
        if let Some(tab) = self.get_mut(&id) {
            tab.url = response.url.clone();
        }
    }

    // =========================================================================
    // EVENT PATH
    // =========================================================================

    /// Merge a pushed event. Returns `false` if it was dropped.
    pub fn apply_event(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::TabUpdated(patch) => {
                let Some(tab) = self.get_mut(&patch.id) else {
                    debug!(tab_id = %patch.id, "patch for unknown tab dropped");
                    return false;
                };
                if let Some(title) = &patch.title {
                    tab.title = title.clone();
                }
                if let Some(url) = &patch.url {
                    tab.url = url.clone();
                }
                if let Some(favicon) = &patch.favicon {
                    tab.favicon = Some(favicon.clone());
                }
                if let Some(is_loading) = patch.is_loading {
                    tab.is_loading = is_loading;
                }
                true
            }
            UiEvent::TabSwitched { id } => {
                if self.get(id).is_none() {
                    debug!(tab_id = %id, "switch to unknown tab dropped");
                    return false;
                }
                self.set_active(Some(id.clone()));
                true
            }
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn tabs(&self) -> &[MirrorTab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&TabId> {
        self.active.as_ref()
    }

    pub fn active_tab(&self) -> Option<&MirrorTab> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &TabId) -> Option<&MirrorTab> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn policy(&self) -> LastTabPolicy {
        self.policy
    }

    fn get_mut(&mut self, id: &TabId) -> Option<&mut MirrorTab> {
        self.tabs.iter_mut().find(|tab| &tab.id == id)
    }

    fn set_active(&mut self, id: Option<TabId>) {
        for tab in &mut self.tabs {
            tab.is_active = Some(&tab.id) == id.as_ref();
        }
        self.active = id;
    }
}
