//! The navbar state store
//!
//! Mutations are synchronous and total: every operation takes the write
//! lock, applies fully, and releases it before the caller observes
//! anything. There are no illegal states — any combination of active
//! area, active item, and expanded titles is valid; whether those
//! values exist in the configuration is the resolver's concern.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Snapshot of the navbar's mutable UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarState {
    /// Title of the highlighted area
    pub active_area: String,
    /// Title of the highlighted item, if any
    pub active_item: Option<String>,
    /// Titles of expandable items currently disclosed, in disclosure order
    pub expanded_items: Vec<String>,
}

impl NavbarState {
    /// Empty state: no area, no item, nothing disclosed.
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with an initial active area.
    pub fn with_active_area(area: impl Into<String>) -> Self {
        Self {
            active_area: area.into(),
            ..Self::default()
        }
    }

    /// Whether `title` is currently disclosed.
    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded_items.iter().any(|t| t == title)
    }
}

/// Shared handle to one navbar's state.
///
/// Cloning the handle shares the underlying state — that is how a
/// provider scope hands the same store to every consumer in its
/// subtree. Constructing a new store creates fully independent state,
/// so parallel or nested navbars never interfere.
#[derive(Debug, Clone)]
pub struct NavbarStore {
    inner: Arc<RwLock<NavbarState>>,
}

impl Default for NavbarStore {
    fn default() -> Self {
        Self::new(NavbarState::new())
    }
}

impl NavbarStore {
    /// Create a store seeded with `initial`.
    pub fn new(initial: NavbarState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Snapshot the current state.
    pub fn state(&self) -> NavbarState {
        self.inner.read().clone()
    }

    /// Title of the highlighted area.
    pub fn active_area(&self) -> String {
        self.inner.read().active_area.clone()
    }

    /// Title of the highlighted item, if any.
    pub fn active_item(&self) -> Option<String> {
        self.inner.read().active_item.clone()
    }

    /// Titles currently disclosed.
    pub fn expanded_items(&self) -> Vec<String> {
        self.inner.read().expanded_items.clone()
    }

    /// Whether `title` is currently disclosed.
    pub fn is_expanded(&self, title: &str) -> bool {
        self.inner.read().is_expanded(title)
    }

    /// Replace the active area.
    pub fn set_active_area(&self, area: impl Into<String>) {
        let area = area.into();
        tracing::trace!(%area, "set active area");
        self.inner.write().active_area = area;
    }

    /// Replace the active item.
    pub fn set_active_item(&self, item: Option<String>) {
        tracing::trace!(item = ?item, "set active item");
        self.inner.write().active_item = item;
    }

    /// Toggle disclosure of `title`: remove it when present, append it
    /// when absent. Independent of the active item.
    pub fn toggle_expanded_item(&self, title: &str) {
        let mut state = self.inner.write();
        if let Some(index) = state.expanded_items.iter().position(|t| t == title) {
            state.expanded_items.remove(index);
            tracing::trace!(title, "collapsed item");
        } else {
            state.expanded_items.push(title.to_string());
            tracing::trace!(title, "expanded item");
        }
    }

    /// Disclose `title` if it is not already disclosed.
    pub fn expand_item(&self, title: &str) {
        let mut state = self.inner.write();
        if !state.is_expanded(title) {
            state.expanded_items.push(title.to_string());
            tracing::trace!(title, "expanded item");
        }
    }

    /// Replace the disclosed set wholesale.
    pub fn set_expanded_items(&self, items: Vec<String>) {
        self.inner.write().expanded_items = items;
    }

    /// Replace the whole state, e.g. to seed it from resolver output.
    pub fn set_state(&self, state: NavbarState) {
        *self.inner.write() = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mutations() {
        let store = NavbarStore::default();
        store.set_active_area("Reports");
        store.set_active_item(Some("Invoices".to_string()));

        let state = store.state();
        assert_eq!(state.active_area, "Reports");
        assert_eq!(state.active_item.as_deref(), Some("Invoices"));
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let store = NavbarStore::default();
        let before = store.expanded_items();

        store.toggle_expanded_item("Finance");
        assert!(store.is_expanded("Finance"));

        store.toggle_expanded_item("Finance");
        assert_eq!(store.expanded_items(), before);
    }

    #[test]
    fn test_toggle_preserves_other_entries() {
        let store = NavbarStore::default();
        store.toggle_expanded_item("Finance");
        store.toggle_expanded_item("Operations");
        store.toggle_expanded_item("Finance");
        assert_eq!(store.expanded_items(), ["Operations"]);
    }

    #[test]
    fn test_expand_item_is_idempotent() {
        let store = NavbarStore::default();
        store.expand_item("Finance");
        store.expand_item("Finance");
        assert_eq!(store.expanded_items(), ["Finance"]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = NavbarStore::default();
        let shared = store.clone();
        shared.set_active_area("Reports");
        assert_eq!(store.active_area(), "Reports");
    }

    #[test]
    fn test_independent_stores_do_not_interfere() {
        let first = NavbarStore::new(NavbarState::with_active_area("Home"));
        let second = NavbarStore::new(NavbarState::with_active_area("Home"));

        first.set_active_area("Reports");
        first.toggle_expanded_item("Finance");

        assert_eq!(second.active_area(), "Home");
        assert!(!second.is_expanded("Finance"));
    }

    #[test]
    fn test_set_state_replaces_everything() {
        let store = NavbarStore::default();
        store.toggle_expanded_item("Finance");

        store.set_state(NavbarState {
            active_area: "Home".to_string(),
            active_item: None,
            expanded_items: vec!["Operations".to_string()],
        });

        let state = store.state();
        assert_eq!(state.active_area, "Home");
        assert!(!state.is_expanded("Finance"));
        assert!(state.is_expanded("Operations"));
    }

    #[test]
    fn test_state_serialization_round_trip() {
        let state = NavbarState {
            active_area: "Reports".to_string(),
            active_item: Some("Invoices".to_string()),
            expanded_items: vec!["Finance".to_string()],
        };
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavbarState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
