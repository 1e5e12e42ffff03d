//! Which content surface the window shows.
//!
//! The window's visible surface is the one piece of shared mutable state in
//! the shell, and only `Attachment` writes it. The embedding API treats
//! "show this surface" as a command that can silently do nothing, so every
//! attach is verified against the surface's reported visibility and retried
//! once before giving up with a log line.

use tabhost_common::{Bounds, Size, TabId};
use tabhost_webview::ContentSurface;
use tracing::{debug, warn};

use crate::registry::TabRegistry;

/// The host window as seen by the tab core.
pub trait ContentHost {
    /// Logical size of the window's content area.
    fn content_size(&self) -> Size;
    /// `false` once the window has been destroyed.
    fn is_alive(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct Attachment {
    shown: Option<TabId>,
}

impl Attachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<&TabId> {
        self.shown.as_ref()
    }

    /// Make `id`'s surface the only visible one, size it to `bounds` and
    /// focus it. Re-attaching the shown surface re-applies everything.
    /// Returns `false` if the window could not be brought in sync.
    pub fn attach<S: ContentSurface>(
        &mut self,
        registry: &mut TabRegistry<S>,
        id: &TabId,
        bounds: Bounds,
    ) -> bool {
        if !registry.contains(id) {
            warn!(tab_id = %id, "attach requested for unknown tab");
            return false;
        }

        if let Some(previous) = self.shown.take() {
            if &previous != id {
                hide(registry, &previous);
            }
        }
        hide_others(registry, id);

        // Recorded before verification so a later attach still hides it.
        self.shown = Some(id.clone());

        let Some(surface) = registry.get_mut(id) else {
            return false;
        };

        let mut in_sync = show(surface);
        if !in_sync {
            warn!(tab_id = %id, "attachment desync: surface not visible, retrying");
            in_sync = show(surface);
            if !in_sync {
                warn!(tab_id = %id, "attachment desync persists after retry");
            }
        }

        if let Err(e) = surface.set_bounds(bounds) {
            warn!(tab_id = %id, error = %e, "failed to apply surface bounds");
        }
        if let Err(e) = surface.focus() {
            warn!(tab_id = %id, error = %e, "failed to focus surface");
        }

        debug!(tab_id = %id, ?bounds, in_sync, "surface attached");
        in_sync
    }

    /// Ensure the window shows no content surface.
    pub fn detach_all<S: ContentSurface>(&mut self, registry: &mut TabRegistry<S>) {
        if let Some(previous) = self.shown.take() {
            hide(registry, &previous);
        }
        for (id, surface) in registry.iter_mut() {
            if surface.is_visible() {
                warn!(tab_id = %id, "hiding stray visible surface");
                if let Err(e) = surface.set_visible(false) {
                    warn!(tab_id = %id, error = %e, "failed to hide surface");
                }
            }
        }
        debug!("window shows no content surface");
    }

    /// Drop the record of `id` after its surface left the registry. The
    /// caller owns the removed surface and is responsible for hiding it.
    pub fn forget(&mut self, id: &TabId) {
        if self.shown.as_ref() == Some(id) {
            self.shown = None;
        }
    }

    /// Re-apply `bounds` to the shown surface only; hidden surfaces are
    /// not resized.
    pub fn relayout<S: ContentSurface>(&self, registry: &mut TabRegistry<S>, bounds: Bounds) {
        let Some(id) = self.shown.as_ref() else {
            return;
        };
        if let Some(surface) = registry.get_mut(id) {
            if let Err(e) = surface.set_bounds(bounds) {
                warn!(tab_id = %id, error = %e, "failed to apply surface bounds");
            }
        }
    }
}

fn show<S: ContentSurface>(surface: &mut S) -> bool {
    match surface.set_visible(true) {
        Ok(()) => surface.is_visible(),
        Err(e) => {
            warn!(error = %e, "failed to show surface");
            false
        }
    }
}

/// Hide a previously shown surface. A surface that is already gone is
/// logged and skipped.
fn hide<S: ContentSurface>(registry: &mut TabRegistry<S>, id: &TabId) {
    match registry.get_mut(id) {
        Some(surface) => {
            if let Err(e) = surface.set_visible(false) {
                warn!(tab_id = %id, error = %e, "failed to detach surface");
            }
        }
        None => debug!(tab_id = %id, "previously shown surface already destroyed"),
    }
}

fn hide_others<S: ContentSurface>(registry: &mut TabRegistry<S>, keep: &TabId) {
    for (id, surface) in registry.iter_mut() {
        if id != keep && surface.is_visible() {
            warn!(tab_id = %id, "hiding stray visible surface");
            if let Err(e) = surface.set_visible(false) {
                warn!(tab_id = %id, error = %e, "failed to hide surface");
            }
        }
    }
}
