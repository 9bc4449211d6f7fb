//! Title bar with the backend indicator

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use soarca_gui_core::types::BackendStatus;

use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let bar = Style::default().bg(c.highlight).fg(c.selected_fg);

    let title = Paragraph::new(format!(" SOARCA v{}", env!("CARGO_PKG_VERSION"))).style(bar);
    frame.render_widget(title, area);

    let label = match app.backend_status {
        BackendStatus::Checking => "checking",
        BackendStatus::Ok => "ok",
        BackendStatus::Error => "unreachable",
    };
    let indicator = Line::from(vec![
        Span::styled("● ", bar.fg(c.backend(app.backend_status))),
        Span::styled(format!("Backend {label} "), bar),
    ]);
    frame.render_widget(
        Paragraph::new(indicator).alignment(Alignment::Right),
        area,
    );
}
