//! Tab id -> surface map with insertion order and a single active pointer.

use std::collections::HashMap;

use tabhost_common::TabId;

/// Owns every open tab's surface.
///
/// All operations are synchronous and touch nothing but the map and the
/// active pointer. `remove` deliberately leaves the active pointer alone:
/// the caller picks the successor.
pub struct TabRegistry<S> {
    order: Vec<TabId>,
    surfaces: HashMap<TabId, S>,
    active: Option<TabId>,
}

impl<S> TabRegistry<S> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            surfaces: HashMap::new(),
            active: None,
        }
    }

    /// Insert a surface. Re-inserting an existing id replaces the surface
    /// in place and returns the old one.
    pub fn insert(&mut self, id: TabId, surface: S) -> Option<S> {
        let previous = self.surfaces.insert(id.clone(), surface);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn remove(&mut self, id: &TabId) -> Option<S> {
        let surface = self.surfaces.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(surface)
    }

    pub fn get(&self, id: &TabId) -> Option<&S> {
        self.surfaces.get(id)
    }

    pub fn get_mut(&mut self, id: &TabId) -> Option<&mut S> {
        self.surfaces.get_mut(id)
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[TabId] {
        &self.order
    }

    /// Point the active marker at `id`, or clear it with `None`.
    /// Returns `false` (and changes nothing) if `id` is not registered.
    pub fn set_active(&mut self, id: Option<TabId>) -> bool {
        match id {
            Some(id) if !self.surfaces.contains_key(&id) => false,
            other => {
                self.active = other;
                true
            }
        }
    }

    pub fn active(&self) -> Option<&TabId> {
        self.active.as_ref()
    }

    pub fn active_surface_mut(&mut self) -> Option<&mut S> {
        let id = self.active.as_ref()?;
        self.surfaces.get_mut(id)
    }

    /// Mutable access to every surface, in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&TabId, &mut S)> {
        let mut surfaces: Vec<(&TabId, &mut S)> = self.surfaces.iter_mut().collect();
        let order = &self.order;
        surfaces.sort_by_key(|(id, _)| order.iter().position(|o| o == *id));
        surfaces.into_iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S> Default for TabRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TabId {
        TabId::from(s)
    }

    #[test]
    fn ids_keep_insertion_order() {
        let mut reg = TabRegistry::new();
        reg.insert(id("c"), 3);
        reg.insert(id("a"), 1);
        reg.insert(id("b"), 2);
        assert_eq!(reg.ids(), &[id("c"), id("a"), id("b")]);
    }

    #[test]
    fn reinsert_replaces_without_reordering() {
        let mut reg = TabRegistry::new();
        reg.insert(id("a"), 1);
        reg.insert(id("b"), 2);
        assert_eq!(reg.insert(id("a"), 10), Some(1));
        assert_eq!(reg.ids(), &[id("a"), id("b")]);
        assert_eq!(reg.get(&id("a")), Some(&10));
    }

    #[test]
    fn remove_returns_surface_and_drops_from_order() {
        let mut reg = TabRegistry::new();
        reg.insert(id("a"), 1);
        reg.insert(id("b"), 2);
        assert_eq!(reg.remove(&id("a")), Some(1));
        assert_eq!(reg.remove(&id("a")), None);
        assert_eq!(reg.ids(), &[id("b")]);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn set_active_rejects_unknown_ids() {
        let mut reg: TabRegistry<u8> = TabRegistry::new();
        assert!(!reg.set_active(Some(id("ghost"))));
        assert_eq!(reg.active(), None);

        reg.insert(id("a"), 1);
        assert!(reg.set_active(Some(id("a"))));
        assert_eq!(reg.active(), Some(&id("a")));

        assert!(reg.set_active(None));
        assert_eq!(reg.active(), None);
    }

    #[test]
    fn remove_leaves_active_pointer_for_caller() {
        let mut reg = TabRegistry::new();
        reg.insert(id("a"), 1);
        reg.set_active(Some(id("a")));
        reg.remove(&id("a"));
        // The caller is responsible for choosing a successor.
        assert_eq!(reg.active(), Some(&id("a")));
        assert!(reg.active_surface_mut().is_none());
    }

    #[test]
    fn iter_mut_follows_insertion_order() {
        let mut reg = TabRegistry::new();
        reg.insert(id("z"), 1);
        reg.insert(id("y"), 2);
        reg.insert(id("x"), 3);
        for (_, v) in reg.iter_mut() {
            *v *= 10;
        }
        let seen: Vec<(TabId, i32)> = reg.iter_mut().map(|(k, v)| (k.clone(), *v)).collect();
        assert_eq!(seen, vec![(id("z"), 10), (id("y"), 20), (id("x"), 30)]);
    }
}
