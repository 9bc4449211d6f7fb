//! Page routing state

use soarca_gui_core::types::NavNode;

/// Current page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// Credentials form, shown until login succeeds
    #[default]
    Login,
    Dashboard,
    Playbooks,
    /// Menu destination without a terminal view yet
    Placeholder { title: &'static str },
}

impl Page {
    /// Page for a navigation leaf
    pub fn for_node(node: &NavNode) -> Self {
        match node.href {
            "/dashboard" => Self::Dashboard,
            "/playbooks" => Self::Playbooks,
            _ => Self::Placeholder { title: node.label },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Playbooks => "Playbook Inventory",
            Self::Placeholder { title } => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soarca_gui_core::types::{NavIcon, NavNode};

    #[test]
    fn known_hrefs_map_to_pages() {
        let node = NavNode::link("playbooks", NavIcon::ShieldCheck, "Playbooks", "/playbooks");
        assert_eq!(Page::for_node(&node), Page::Playbooks);

        let node = NavNode::link("calendar", NavIcon::Calendar, "Calendar", "/calendar");
        let page = Page::for_node(&node);
        assert_eq!(page, Page::Placeholder { title: "Calendar" });
        assert_eq!(page.title(), "Calendar");
    }
}
