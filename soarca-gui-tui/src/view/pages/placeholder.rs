//! Menu destinations without a terminal view

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::view::theme::colors;

pub fn render(title: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {title} is not available in the terminal yet."),
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
