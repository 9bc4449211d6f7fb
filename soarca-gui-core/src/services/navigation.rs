//! Navigation rail state machine

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{PreferenceStore, SIDEBAR_EXPANDED_KEY};
use crate::types::{DismissEvent, NavEntry, NavNode, OverlayState, RailMode, Viewport};

/// Rail state: at most one open group, the pinned flag, the current path and the
/// narrow-viewport overlay.
pub struct NavigationState {
    tree: Vec<NavNode>,
    open_group: Option<&'static str>,
    rail: RailMode,
    viewport: Viewport,
    overlay: OverlayState,
    current_path: String,
    store: Arc<dyn PreferenceStore>,
}

impl std::fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationState")
            .field("open_group", &self.open_group)
            .field("rail", &self.rail)
            .field("viewport", &self.viewport)
            .field("overlay", &self.overlay)
            .field("current_path", &self.current_path)
            .finish_non_exhaustive()
    }
}

impl NavigationState {
    /// Restore the rail mode from `store`; unreadable or absent means collapsed
    pub fn new(tree: Vec<NavNode>, store: Arc<dyn PreferenceStore>) -> Self {
        let stored = match store.get(SIDEBAR_EXPANDED_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read rail preference: {e}");
                None
            }
        };
        Self {
            tree,
            open_group: None,
            rail: RailMode::from_stored(stored.as_deref()),
            viewport: Viewport::default(),
            overlay: OverlayState::default(),
            current_path: String::new(),
            store,
        }
    }

    // ===== Queries =====

    #[must_use]
    pub fn tree(&self) -> &[NavNode] {
        &self.tree
    }

    #[must_use]
    pub fn open_group(&self) -> Option<&str> {
        self.open_group
    }

    #[must_use]
    pub fn is_group_open(&self, id: &str) -> bool {
        self.open_group == Some(id)
    }

    #[must_use]
    pub fn rail(&self) -> RailMode {
        self.rail
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.rail == RailMode::Pinned
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Labels are visible when pinned, or whenever the narrow overlay is shown
    #[must_use]
    pub fn shows_labels(&self) -> bool {
        match self.viewport {
            Viewport::Wide => self.is_pinned(),
            Viewport::Narrow => self.overlay == OverlayState::Shown,
        }
    }

    /// Group is open, or the current path lies under its href
    #[must_use]
    pub fn is_group_highlighted(&self, id: &str) -> bool {
        if self.is_group_open(id) {
            return true;
        }
        self.tree
            .iter()
            .find(|node| node.id == id && node.is_group())
            .is_some_and(|node| self.current_path.starts_with(node.href))
    }

    /// Path equals `href` or lies beneath it
    #[must_use]
    pub fn is_item_active(&self, href: &str) -> bool {
        self.current_path == href
            || self
                .current_path
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Rows as rendered: top-level nodes, plus the open group's children when labels show
    #[must_use]
    pub fn visible_entries(&self) -> Vec<NavEntry<'_>> {
        let expand = self.shows_labels();
        let mut entries = Vec::with_capacity(self.tree.len());
        for node in &self.tree {
            if node.is_group() {
                let open = self.is_group_open(node.id);
                entries.push(NavEntry::Group { node, open });
                if open && expand {
                    entries.extend(
                        node.children
                            .iter()
                            .map(|child| NavEntry::Child { parent: node, node: child }),
                    );
                }
            } else {
                entries.push(NavEntry::Item(node));
            }
        }
        entries
    }

    // ===== Transitions =====

    /// Open `id` (closing any other group), or close it when already open
    ///
    /// Opening a group on a collapsed rail pins the rail.
    pub fn toggle_group(&mut self, id: &str) -> CoreResult<()> {
        let node_id = self
            .tree
            .iter()
            .find(|node| node.id == id && node.is_group())
            .map(|node| node.id)
            .ok_or_else(|| CoreError::NavGroupNotFound(id.to_string()))?;

        if self.open_group == Some(node_id) {
            self.open_group = None;
        } else {
            self.open_group = Some(node_id);
            if self.rail == RailMode::Collapsed {
                self.set_rail(RailMode::Pinned);
            }
        }
        Ok(())
    }

    /// Flip the rail between collapsed and pinned
    pub fn toggle_pinned(&mut self) {
        self.set_rail(self.rail.toggled());
    }

    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Switching to wide hides the overlay
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        if viewport == Viewport::Wide {
            self.overlay = OverlayState::Hidden;
        }
    }

    /// Show or hide the narrow overlay; no effect on a wide viewport
    pub fn toggle_overlay(&mut self) {
        if self.viewport == Viewport::Narrow {
            self.overlay = match self.overlay {
                OverlayState::Hidden => OverlayState::Shown,
                OverlayState::Shown => OverlayState::Hidden,
            };
        }
    }

    /// Close the overlay in response to `event`; returns whether anything changed
    ///
    /// Only meaningful in the narrow viewport.
    pub fn dismiss(&mut self, event: DismissEvent) -> bool {
        if self.viewport != Viewport::Narrow || self.overlay == OverlayState::Hidden {
            return false;
        }
        log::debug!("Navigation overlay dismissed by {event:?}");
        self.overlay = OverlayState::Hidden;
        true
    }

    fn set_rail(&mut self, rail: RailMode) {
        self.rail = rail;
        if let Err(e) = self.store.set(SIDEBAR_EXPANDED_KEY, rail.as_stored()) {
            log::warn!("Failed to persist rail preference: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FailingPreferenceStore;
    use crate::traits::InMemoryPreferenceStore;
    use crate::types::default_nav_tree;

    fn state_with(store: &InMemoryPreferenceStore) -> NavigationState {
        NavigationState::new(default_nav_tree(), Arc::new(store.clone()))
    }

    fn stored(store: &InMemoryPreferenceStore) -> Option<String> {
        store.get(SIDEBAR_EXPANDED_KEY).unwrap()
    }

    #[test]
    fn starts_collapsed_without_stored_flag() {
        let state = state_with(&InMemoryPreferenceStore::new());
        assert_eq!(state.rail(), RailMode::Collapsed);
        assert_eq!(state.open_group(), None);
    }

    #[test]
    fn starts_pinned_from_stored_flag() {
        let store = InMemoryPreferenceStore::new();
        store.set(SIDEBAR_EXPANDED_KEY, "true").unwrap();
        assert!(state_with(&store).is_pinned());

        store.set(SIDEBAR_EXPANDED_KEY, "nonsense").unwrap();
        assert!(!state_with(&store).is_pinned());
    }

    #[test]
    fn opening_group_on_collapsed_rail_pins_it() {
        let store = InMemoryPreferenceStore::new();
        let mut state = state_with(&store);
        state.toggle_group("users").unwrap();

        assert_eq!(state.rail(), RailMode::Pinned);
        assert_eq!(state.open_group(), Some("users"));
        assert_eq!(stored(&store).as_deref(), Some("true"));
    }

    #[test]
    fn toggle_same_group_twice_closes_it() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        state.toggle_group("settings").unwrap();
        state.toggle_group("settings").unwrap();
        assert_eq!(state.open_group(), None);
        // closing does not collapse the rail
        assert!(state.is_pinned());
    }

    #[test]
    fn only_one_group_open() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        state.toggle_group("users").unwrap();
        state.toggle_group("settings").unwrap();
        assert!(state.is_group_open("settings"));
        assert!(!state.is_group_open("users"));
    }

    #[test]
    fn unknown_or_leaf_group_is_rejected() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        assert_eq!(
            state.toggle_group("nope"),
            Err(CoreError::NavGroupNotFound("nope".to_string()))
        );
        assert!(state.toggle_group("dashboard").is_err());
        assert_eq!(state.rail(), RailMode::Collapsed);
    }

    #[test]
    fn toggle_pinned_persists_each_flip() {
        let store = InMemoryPreferenceStore::new();
        let mut state = state_with(&store);
        state.toggle_pinned();
        assert_eq!(stored(&store).as_deref(), Some("true"));
        state.toggle_pinned();
        assert_eq!(stored(&store).as_deref(), Some("false"));
        assert_eq!(state.rail(), RailMode::Collapsed);
    }

    #[test]
    fn persistence_failure_does_not_block_transition() {
        let mut state = NavigationState::new(default_nav_tree(), Arc::new(FailingPreferenceStore));
        state.toggle_pinned();
        assert!(state.is_pinned());
        state.toggle_group("users").unwrap();
        assert_eq!(state.open_group(), Some("users"));
    }

    #[test]
    fn path_highlighting() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        state.set_current_path("/settings/profile");

        assert!(state.is_group_highlighted("settings"));
        assert!(!state.is_group_highlighted("users"));
        assert!(state.is_item_active("/settings/profile"));
        assert!(state.is_item_active("/settings"));
        assert!(!state.is_item_active("/settings/general"));
        assert!(!state.is_item_active("/settings/pro"));
    }

    #[test]
    fn open_group_is_highlighted_off_path() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        state.set_current_path("/dashboard");
        state.toggle_group("users").unwrap();
        assert!(state.is_group_highlighted("users"));
    }

    #[test]
    fn dismiss_only_in_narrow_viewport() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        assert!(!state.dismiss(DismissEvent::Escape));

        state.set_viewport(Viewport::Narrow);
        state.toggle_overlay();
        assert_eq!(state.overlay(), OverlayState::Shown);
        assert!(state.dismiss(DismissEvent::OutsideClick));
        assert_eq!(state.overlay(), OverlayState::Hidden);
        assert!(!state.dismiss(DismissEvent::Escape));
    }

    #[test]
    fn widening_hides_overlay() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        state.set_viewport(Viewport::Narrow);
        state.toggle_overlay();
        state.set_viewport(Viewport::Wide);
        assert_eq!(state.overlay(), OverlayState::Hidden);
        state.toggle_overlay();
        assert_eq!(state.overlay(), OverlayState::Hidden);
    }

    #[test]
    fn visible_entries_expand_open_group() {
        let mut state = state_with(&InMemoryPreferenceStore::new());
        let collapsed = state.visible_entries().len();
        assert_eq!(collapsed, default_nav_tree().len());

        state.toggle_group("settings").unwrap();
        let entries = state.visible_entries();
        assert_eq!(entries.len(), collapsed + 3);
        assert!(entries
            .iter()
            .any(|e| matches!(e, NavEntry::Child { node, .. } if node.id == "settings-general")));

        state.toggle_pinned();
        assert_eq!(state.visible_entries().len(), collapsed);
    }
}
