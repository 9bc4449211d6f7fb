//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear},
    Frame,
};
use soarca_gui_core::types::{OverlayState, Viewport};

use crate::model::{App, Page, PINNED_RAIL_WIDTH};

use super::components;
use super::pages;
use super::theme::Styles;

/// Render the whole frame
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Header + body + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let header_area = main_layout[0];
    let body_area = main_layout[1];
    let status_area = main_layout[2];

    components::header::render(app, frame, header_area);

    if app.current_page == Page::Login {
        pages::login::render(app, frame, body_area);
    } else {
        render_body(app, frame, body_area);
    }

    components::statusbar::render(app, frame, status_area);

    // Modals go on top
    components::modal::render(app, frame);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    let overlay = app.navigation.viewport() == Viewport::Narrow
        && app.navigation.overlay() == OverlayState::Shown;

    if overlay {
        // Content keeps the full width; the rail covers its left edge
        render_page_content(app, frame, area);
        let rail_area = Rect::new(area.x, area.y, PINNED_RAIL_WIDTH.min(area.width), area.height);
        frame.render_widget(Clear, rail_area);
        components::sidebar::render(app, frame, rail_area);
        return;
    }

    let rail_width = app.rail_width();
    if rail_width == 0 {
        render_page_content(app, frame, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(rail_width), Constraint::Min(1)])
        .split(area);

    components::sidebar::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
}

/// Centered rectangle, clipped to `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Dashboard => pages::dashboard::render(app, frame, inner_area),
        Page::Playbooks => pages::playbooks::render(app, frame, inner_area),
        Page::Placeholder { title } => pages::placeholder::render(title, frame, inner_area),
        Page::Login => {}
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::runtime::Runtime;

    use super::*;
    use crate::backend::testing::core_service;

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn login_page_renders_form() {
        let runtime = Runtime::new().unwrap();
        let app = App::new(core_service(&runtime));
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Sign in"));
        assert!(screen.contains("Email"));
    }

    #[test]
    fn pinned_rail_shows_labels() {
        let runtime = Runtime::new().unwrap();
        let mut app = App::new(core_service(&runtime));
        app.current_page = Page::Dashboard;
        let collapsed = draw(&app, 100, 30);
        assert!(!collapsed.contains("Integrations"));

        app.navigation.toggle_pinned();
        let pinned = draw(&app, 100, 30);
        assert!(pinned.contains("Integrations"));
    }

    #[test]
    fn narrow_overlay_draws_over_content() {
        let runtime = Runtime::new().unwrap();
        let mut app = App::new(core_service(&runtime));
        app.current_page = Page::Dashboard;
        app.navigation.set_viewport(Viewport::Narrow);
        assert!(!draw(&app, 60, 30).contains("Documentation"));

        app.navigation.toggle_overlay();
        assert!(draw(&app, 60, 30).contains("Documentation"));
    }
}
