//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current focus and page
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.current_page == Page::Login {
        return vec![
            ("Tab", "Next field"),
            ("Alt+s", "Show password"),
            ("Enter", "Sign in"),
            ("Esc", "Quit"),
        ];
    }
    if app.modal.is_open() {
        return vec![("Enter", "Confirm"), ("Esc", "Close")];
    }

    let mut hints = vec![("Tab", "Switch panel")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Move"));
            hints.push(("Enter", "Open"));
            hints.push(("Ctrl+b", "Pin rail"));
        }
        FocusPanel::Content if app.current_page == Page::Playbooks => {
            if app.inventory.filter_editing {
                return vec![("Enter", "Done"), ("Ctrl+u", "Clear"), ("Esc", "Done")];
            }
            if app.inventory.dispatcher.is_menu_open() {
                return vec![("↑↓", "Choose"), ("Enter", "Apply"), ("Esc", "Close")];
            }
            hints.push(("Space", "Select"));
            hints.push(("a", "All"));
            hints.push(("/", "Search"));
            hints.push(("b", "Actions"));
            hints.push(("e", "Edit"));
        }
        FocusPanel::Content => {}
    }

    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));
    hints
}
