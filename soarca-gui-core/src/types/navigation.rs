//! Navigation tree model
//!
//! Static data consumed by [`NavigationState`](crate::services::NavigationState).
//! Icons are opaque tags; the renderer decides what to draw for each.

use serde::Serialize;

/// Icon reference resolved by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavIcon {
    Home,
    AlertTriangle,
    ShieldCheck,
    Puzzle,
    Database,
    Users,
    UserCircle,
    FolderOpen,
    Calendar,
    BookOpen,
    Settings,
}

/// Navigation node (one level of nesting)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavNode {
    pub id: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
    pub href: &'static str,
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Leaf node
    #[must_use]
    pub fn link(id: &'static str, icon: NavIcon, label: &'static str, href: &'static str) -> Self {
        Self {
            id,
            icon,
            label,
            href,
            children: Vec::new(),
        }
    }

    /// Group node; children must be leaves
    #[must_use]
    pub fn group(
        id: &'static str,
        icon: NavIcon,
        label: &'static str,
        href: &'static str,
        children: Vec<NavNode>,
    ) -> Self {
        debug_assert!(children.iter().all(|c| c.children.is_empty()));
        Self {
            id,
            icon,
            label,
            href,
            children,
        }
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Rail width mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RailMode {
    /// Icons only
    #[default]
    Collapsed,
    /// Icons and labels, persisted across sessions
    Pinned,
}

impl RailMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Pinned,
            Self::Pinned => Self::Collapsed,
        }
    }

    /// Persisted representation (`"true"` = pinned)
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Collapsed => "false",
            Self::Pinned => "true",
        }
    }

    /// Anything other than `"true"` is collapsed
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Pinned,
            _ => Self::Collapsed,
        }
    }
}

/// Presentation mode, chosen from the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Viewport {
    #[default]
    Wide,
    /// Rail rendered as a dismissible overlay
    Narrow,
}

/// Overlay visibility in the narrow presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OverlayState {
    #[default]
    Hidden,
    Shown,
}

/// External dismissal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissEvent {
    OutsideClick,
    Escape,
}

/// One visible rail row, flattened for keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry<'a> {
    Item(&'a NavNode),
    Group { node: &'a NavNode, open: bool },
    Child { parent: &'a NavNode, node: &'a NavNode },
}

impl<'a> NavEntry<'a> {
    #[must_use]
    pub fn node(&self) -> &'a NavNode {
        match *self {
            Self::Item(node) | Self::Group { node, .. } | Self::Child { node, .. } => node,
        }
    }
}

/// Dashboard menu
#[must_use]
pub fn default_nav_tree() -> Vec<NavNode> {
    vec![
        NavNode::link("dashboard", NavIcon::Home, "Dashboard", "/dashboard"),
        NavNode::link("incidents", NavIcon::AlertTriangle, "Incidents", "/incidents"),
        NavNode::link("playbooks", NavIcon::ShieldCheck, "Playbooks", "/playbooks"),
        NavNode::link("integrations", NavIcon::Puzzle, "Integrations", "/integrations"),
        NavNode::link("assets", NavIcon::Database, "Assets", "/assets"),
        NavNode::group(
            "users",
            NavIcon::Users,
            "Users",
            "/users",
            vec![
                NavNode::link("users-all", NavIcon::Users, "All Users", "/users/all"),
                NavNode::link("users-active", NavIcon::Users, "Active Users", "/users/active"),
            ],
        ),
        NavNode::link("projects", NavIcon::FolderOpen, "Projects", "/projects"),
        NavNode::link("calendar", NavIcon::Calendar, "Calendar", "/calendar"),
        NavNode::link("docs", NavIcon::BookOpen, "Documentation", "/docs"),
        NavNode::group(
            "settings",
            NavIcon::Settings,
            "Settings",
            "/settings",
            vec![
                NavNode::link("settings-profile", NavIcon::UserCircle, "Profile", "/settings/profile"),
                NavNode::link("settings-general", NavIcon::Settings, "General", "/settings/general"),
                NavNode::link(
                    "settings-integrations",
                    NavIcon::Puzzle,
                    "Integration Settings",
                    "/settings/integrations",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_flag_round_trips() {
        assert_eq!(RailMode::from_stored(Some(RailMode::Pinned.as_stored())), RailMode::Pinned);
        assert_eq!(RailMode::from_stored(Some("false")), RailMode::Collapsed);
        assert_eq!(RailMode::from_stored(Some("yes")), RailMode::Collapsed);
        assert_eq!(RailMode::from_stored(None), RailMode::Collapsed);
    }

    #[test]
    fn default_tree_has_two_groups() {
        let groups: Vec<_> = default_nav_tree()
            .into_iter()
            .filter(NavNode::is_group)
            .map(|n| n.id)
            .collect();
        assert_eq!(groups, vec!["users", "settings"]);
    }
}
