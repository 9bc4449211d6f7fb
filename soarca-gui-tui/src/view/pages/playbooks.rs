//! Playbook inventory page

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};
use soarca_gui_core::services::{BulkActionDispatcher, InventoryStore};
use soarca_gui_core::types::BulkAction;

use crate::model::App;
use crate::util::truncate;
use crate::view::theme::{colors, Styles};

const MENU_WIDTH: u16 = 24;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let store = app.backend.inventory().blocking_read();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_toolbar(app, &store, frame, chunks[0]);

    if store.is_empty() && !app.inventory.loaded {
        let c = colors();
        frame.render_widget(
            Paragraph::new(Line::styled("  Loading playbooks...", Style::default().fg(c.muted))),
            chunks[2],
        );
    } else if store.filtered_records().is_empty() {
        render_empty(&store, frame, chunks[2]);
    } else {
        render_table(app, &store, frame, chunks[2]);
    }

    if app.inventory.dispatcher.is_menu_open() {
        render_action_menu(app, frame, area);
    }
}

/// Search box on the left, selection count and actions control on the right
fn render_toolbar(app: &App, store: &InventoryStore, frame: &mut Frame, area: Rect) {
    let c = colors();
    let editing = app.inventory.filter_editing;

    let search_style = if editing {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let mut left = vec![
        Span::styled(" Search: ", Style::default().fg(c.muted)),
        Span::styled(store.filter().to_string(), search_style),
    ];
    if editing {
        left.push(Span::styled("▏", search_style));
    } else if store.filter().is_empty() {
        left.push(Span::styled("(press /)", Style::default().fg(c.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), area);

    let count = store.selection_count();
    let actions_style = if BulkActionDispatcher::is_enabled(count) {
        Styles::hint_key()
    } else {
        Style::default().fg(c.muted)
    };
    let mut right = Vec::new();
    if app.backend.inventory().is_busy() {
        right.push(Span::styled("Working...  ", Style::default().fg(c.warning)));
    }
    right.push(Span::styled(format!("{count} selected  "), Style::default().fg(c.fg)));
    right.push(Span::styled("[b] Actions ", actions_style));
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        area,
    );
}

fn render_empty(store: &InventoryStore, frame: &mut Frame, area: Rect) {
    let c = colors();
    let message = if store.filter().is_empty() {
        "  No playbooks yet.".to_string()
    } else {
        format!("  No playbooks match \"{}\".", store.filter())
    };
    frame.render_widget(
        Paragraph::new(Line::styled(message, Style::default().fg(c.muted))),
        area,
    );
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn render_table(app: &App, store: &InventoryStore, frame: &mut Frame, area: Rect) {
    let c = colors();
    let name_width = usize::from(area.width.saturating_sub(50)).max(12);

    let header = Row::new(vec![
        Cell::from(checkbox(store.is_all_selected())),
        Cell::from("Name"),
        Cell::from("Status"),
        Cell::from("Last modified"),
        Cell::from("Created by"),
    ])
    .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = store
        .filtered_records()
        .into_iter()
        .map(|playbook| {
            Row::new(vec![
                Cell::from(checkbox(store.is_selected(&playbook.id))),
                Cell::from(truncate(&playbook.name, name_width)),
                Cell::from(Span::styled(
                    playbook.status.as_str(),
                    Style::default().fg(c.status(playbook.status)),
                )),
                Cell::from(playbook.last_modified.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(truncate(&playbook.created_by, 14)),
            ])
            .style(Style::default().fg(c.fg))
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(12),
        Constraint::Length(9),
        Constraint::Length(17),
        Constraint::Length(14),
    ];
    let mut table = Table::new(rows, widths).header(header).column_spacing(1);
    if app.focus.is_content() {
        table = table.row_highlight_style(Styles::selected());
    }

    let mut state = TableState::default();
    state.select(Some(app.inventory.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Dropdown under the actions control
fn render_action_menu(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let height = u16::try_from(BulkAction::ALL.len()).unwrap_or(3) + 2;
    let width = MENU_WIDTH.min(area.width);
    let menu = Rect::new(
        area.x + area.width - width,
        area.y + 1,
        width,
        height.min(area.height.saturating_sub(1)),
    );
    frame.render_widget(Clear, menu);

    let items: Vec<ListItem> = BulkAction::ALL
        .iter()
        .map(|action| {
            let color = if action.is_destructive() { c.error } else { c.fg };
            ListItem::new(Line::styled(action.label(), Style::default().fg(color)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(true))
                .style(Style::default().bg(c.bg)),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let highlighted = BulkAction::ALL
        .iter()
        .position(|action| *action == app.inventory.dispatcher.highlighted_action());
    let mut state = ListState::default();
    state.select(highlighted);
    frame.render_stateful_widget(list, menu, &mut state);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::runtime::Runtime;

    use super::*;
    use crate::backend::testing::core_service;
    use crate::backend::BackendEvent;
    use crate::model::Page;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(app, frame, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn loaded_app(runtime: &Runtime) -> App {
        let mut backend = core_service(runtime);
        backend.load_playbooks();
        assert!(matches!(backend.recv_blocking(), Some(BackendEvent::Loaded(Ok(5)))));
        let mut app = App::new(backend);
        app.current_page = Page::Playbooks;
        app.inventory.loaded = true;
        app
    }

    #[test]
    fn rows_show_selection_and_count() {
        let runtime = Runtime::new().unwrap();
        let app = loaded_app(&runtime);
        app.backend.toggle_selection("pb-002").unwrap();

        let text = screen(&app);
        assert!(text.contains("Malware Containment"));
        assert!(text.contains("[x]"));
        assert!(text.contains("1 selected"));
    }

    #[test]
    fn empty_filter_result_says_so() {
        let runtime = Runtime::new().unwrap();
        let app = loaded_app(&runtime);
        app.backend.set_filter("zzz");
        assert!(screen(&app).contains("No playbooks match \"zzz\""));
    }

    #[test]
    fn open_menu_lists_actions() {
        let runtime = Runtime::new().unwrap();
        let mut app = loaded_app(&runtime);
        app.backend.toggle_selection("pb-001").unwrap();
        app.inventory.dispatcher.toggle_menu(1);
        let text = screen(&app);
        for action in BulkAction::ALL {
            assert!(text.contains(action.label()));
        }
    }
}
