//! Dashboard: inventory overview

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use soarca_gui_core::types::PlaybookStatus;

use crate::model::App;
use crate::util::truncate;
use crate::view::theme::colors;

/// Most recently modified playbooks listed under the totals
const RECENT_COUNT: usize = 3;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let store = app.backend.inventory().blocking_read();
    let counts = store.status_counts();

    let mut lines = vec![
        Line::from(""),
        Line::styled("  Playbooks", Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    Total     "),
            Span::styled(counts.total().to_string(), Style::default().fg(c.fg)),
        ]),
    ];
    for (status, count) in [
        (PlaybookStatus::Active, counts.active),
        (PlaybookStatus::Inactive, counts.inactive),
        (PlaybookStatus::Draft, counts.draft),
    ] {
        lines.push(Line::from(vec![
            Span::styled("    ● ", Style::default().fg(c.status(status))),
            Span::raw(format!("{:<9}", status.as_str())),
            Span::styled(count.to_string(), Style::default().fg(c.fg)),
        ]));
    }

    let mut recent: Vec<_> = store.records().iter().collect();
    recent.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    if !recent.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "  Recently modified",
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));
        let name_width = usize::from(area.width.saturating_sub(22));
        for playbook in recent.into_iter().take(RECENT_COUNT) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {} ", playbook.last_modified.format("%Y-%m-%d")),
                    Style::default().fg(c.muted),
                ),
                Span::raw(truncate(&playbook.name, name_width)),
            ]));
        }
    } else if !app.inventory.loaded {
        lines.push(Line::from(""));
        lines.push(Line::styled("  Loading...", Style::default().fg(c.muted)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
