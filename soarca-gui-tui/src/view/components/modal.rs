//! Modal dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use soarca_gui_core::services::{EditSession, MAX_DESCRIPTION_LEN};

use crate::model::{App, EditField, Modal};
use crate::view::layout::centered_rect;
use crate::view::theme::colors;

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::EditPlaybook {
            session,
            focus,
            error,
            saving,
        } => render_edit(frame, session, *focus, error.as_deref(), *saving),
        Modal::ConfirmDelete { count, focus } => render_confirm_delete(frame, *count, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

fn dialog(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg))
}

/// Area inside the border with one column of padding each side
fn padded(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn render_edit(
    frame: &mut Frame,
    session: &EditSession,
    focus: EditField,
    error: Option<&str>,
    saving: bool,
) {
    let c = colors();
    let area = centered_rect(64, 17, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog("Edit Playbook", c.highlight), area);

    let label_style = |field: EditField| {
        if focus == field {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        }
    };
    let value_style = |field: EditField| {
        if focus == field {
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        }
    };
    let cursor = |field: EditField| if focus == field && !saving { "▏" } else { "" };

    let description_len = session.description.chars().count();
    let counter_style = if description_len > MAX_DESCRIPTION_LEN {
        Style::default().fg(c.error)
    } else {
        Style::default().fg(c.muted)
    };

    let mut lines = vec![
        Line::styled("Name", label_style(EditField::Name)),
        Line::from(vec![
            Span::styled(format!("  {}", session.name), value_style(EditField::Name)),
            Span::raw(cursor(EditField::Name)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Description", label_style(EditField::Description)),
            Span::styled(format!("  {description_len}/{MAX_DESCRIPTION_LEN}"), counter_style),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {}", session.description),
                value_style(EditField::Description),
            ),
            Span::raw(cursor(EditField::Description)),
        ]),
        Line::from(""),
        Line::styled("Status", label_style(EditField::Status)),
        Line::styled(
            if focus == EditField::Status {
                format!("  ◀ {} ▶", session.status)
            } else {
                format!("  {}", session.status)
            },
            value_style(EditField::Status),
        ),
        Line::from(""),
    ];

    if let Some(error) = error {
        lines.push(Line::styled(format!("✗ {error}"), Style::default().fg(c.error)));
    }
    lines.push(if saving {
        Line::styled("Saving...", Style::default().fg(c.warning))
    } else {
        Line::styled(
            "Enter save · Tab next field · ←→ status · Esc cancel",
            Style::default().fg(Color::DarkGray),
        )
    });

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        padded(area),
    );
}

fn render_confirm_delete(frame: &mut Frame, count: usize, focus: usize) {
    let c = colors();
    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog("Confirm Deletion", c.error), area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("Delete {count} selected playbook(s)?"),
            Style::default().fg(c.fg),
        ),
        Line::styled("This cannot be undone.", Style::default().fg(c.muted)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), padded(area));
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let lines_needed = u16::try_from(message.lines().count()).unwrap_or(1);
    let area = centered_rect(56, 7 + lines_needed, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog(title, c.error), area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(
        message
            .lines()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(c.fg))),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc or Enter to close",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        padded(area),
    );
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(58, 26, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog("Help", c.highlight), area);

    let heading = |text: &'static str| {
        Line::styled(text, Style::default().fg(c.highlight).add_modifier(Modifier::BOLD))
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        heading("Global"),
        entry("Tab", "Switch between rail and content"),
        entry("↑↓ / jk", "Move"),
        entry("Enter", "Open page / toggle group"),
        entry("Ctrl+b", "Pin or collapse the rail"),
        entry("Alt+m", "Show the rail (narrow terminals)"),
        entry("Esc", "Close dialog or rail overlay"),
        entry("Alt+r", "Reload playbooks"),
        entry("q", "Quit"),
        Line::from(""),
        heading("Playbooks"),
        entry("Space", "Select row"),
        entry("a", "Select all / none"),
        entry("/", "Search"),
        entry("Ctrl+u", "Clear search"),
        entry("b", "Bulk actions"),
        entry("e / Enter", "Edit playbook"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), padded(area));
}
