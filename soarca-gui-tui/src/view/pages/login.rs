//! Login page

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, LoginField};
use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

const FORM_WIDTH: u16 = 56;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let login = &app.login;

    let height = 12 + u16::try_from(login.errors.len()).unwrap_or(u16::MAX);
    let form = centered_rect(FORM_WIDTH, height, area);
    frame.render_widget(Clear, form);

    let block = Block::default()
        .title(" Sign in ")
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(form);
    frame.render_widget(block, form);

    let field = |label: &'static str, value: String, focused: bool| {
        let label_style = Style::default().fg(c.muted);
        let value_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        let cursor = if focused && !login.submitting { "▏" } else { "" };
        [
            Line::styled(label, label_style),
            Line::from(vec![
                Span::styled(format!("  {value}"), value_style),
                Span::styled(cursor, value_style),
            ]),
            Line::from(""),
        ]
    };

    let password = if login.show_password {
        login.password.clone()
    } else {
        "•".repeat(login.password.chars().count())
    };

    let mut lines = vec![
        Line::styled(
            "Security Orchestrator for Advanced Response to Cyber Attacks",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
    ];
    lines.extend(field("Email", login.email.clone(), login.focus == LoginField::Email));
    lines.extend(field("Password", password, login.focus == LoginField::Password));

    for error in &login.errors {
        lines.push(Line::styled(format!("✗ {error}"), Style::default().fg(c.error)));
    }

    let action = if login.submitting {
        Span::styled("Signing in...", Style::default().fg(c.warning))
    } else {
        Span::styled("[ Enter ] Sign in", Styles::hint_key())
    };
    lines.push(Line::from(""));
    lines.push(Line::from(action));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
