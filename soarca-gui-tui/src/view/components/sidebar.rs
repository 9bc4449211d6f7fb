//! Navigation rail

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use soarca_gui_core::types::{NavEntry, NavIcon};

use crate::model::App;
use crate::util::truncate;
use crate::view::theme::{colors, Styles};

/// Glyph drawn for an icon
fn glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Home => "⌂",
        NavIcon::AlertTriangle => "▲",
        NavIcon::ShieldCheck => "◆",
        NavIcon::Puzzle => "✚",
        NavIcon::Database => "≡",
        NavIcon::Users => "☺",
        NavIcon::UserCircle => "◉",
        NavIcon::FolderOpen => "▤",
        NavIcon::Calendar => "▦",
        NavIcon::BookOpen => "▥",
        NavIcon::Settings => "✱",
    }
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let nav = &app.navigation;
    let labels = nav.shows_labels();
    let focused = app.focus.is_navigation();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
        .style(Style::default().bg(c.bg));
    if labels {
        block = block.title(" Menu ").title_style(Styles::title());
    }
    // Borders and the cursor marker
    let label_width = usize::from(area.width.saturating_sub(6));

    let items: Vec<ListItem> = nav
        .visible_entries()
        .iter()
        .map(|entry| {
            let (text, highlighted) = match *entry {
                NavEntry::Item(node) => (
                    if labels {
                        format!("{} {}", glyph(node.icon), truncate(node.label, label_width))
                    } else {
                        glyph(node.icon).to_string()
                    },
                    nav.is_item_active(node.href),
                ),
                NavEntry::Group { node, open } => (
                    if labels {
                        let arrow = if open { "▾" } else { "▸" };
                        let label = truncate(node.label, label_width.saturating_sub(2));
                        format!("{} {label} {arrow}", glyph(node.icon))
                    } else {
                        glyph(node.icon).to_string()
                    },
                    nav.is_group_highlighted(node.id),
                ),
                NavEntry::Child { node, .. } => (
                    format!("  {}", truncate(node.label, label_width.saturating_sub(2))),
                    nav.is_item_active(node.href),
                ),
            };

            let style = if highlighted {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list.highlight_style(Styles::selected()).highlight_symbol("▶");
    }

    let mut state = ListState::default();
    state.select(Some(app.nav_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
