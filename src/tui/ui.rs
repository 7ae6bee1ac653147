use crate::tui::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Draft input
            Constraint::Min(0),    // Task list
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_input(frame, chunks[1], app);
    draw_task_list(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.mode == Mode::Edit {
        draw_edit_modal(frame, app);
    }
    if app.mode == Mode::Help {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let header_text = format!(
        "To-Do List - {} tasks, {} completed",
        app.store.total_tasks(),
        app.store.completed_tasks()
    );
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("taskpad"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_input(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (content, style) = if app.mode == Mode::Input {
        (
            with_cursor(&app.store.draft, app.draft_cursor.pos),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else if app.store.draft.is_empty() {
        (
            "Add a new task... (press 'a')".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.store.draft.clone(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title("New task"))
        .style(style);

    frame.render_widget(input, area);
}

fn draw_task_list(frame: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .store
        .visible_tasks()
        .map(|(_, task)| {
            let is_bulk_selected = app.store.is_selected(task.id);
            let checkbox = if task.completed { "☑" } else { "☐" };
            let selection_indicator = if is_bulk_selected { "●" } else { " " };
            let display_content =
                format!("{}{} {}", selection_indicator, checkbox, task.text);

            let style = if is_bulk_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(display_content, style)))
        })
        .collect();

    let title = if app.mode == Mode::Search {
        format!("Tasks - search: {}█", app.store.search_term())
    } else if !app.store.search_term().is_empty() {
        format!("Tasks - filter: {}", app.store.search_term())
    } else {
        "Tasks".to_string()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if app.store.visible_count() > 0 {
        list_state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let footer_text = match app.mode {
        Mode::Input => {
            "ADD MODE | Enter: add task | Esc: back | ←→: cursor".to_string()
        }
        Mode::Search => {
            "SEARCH MODE | type to filter | Enter: keep filter | Esc: clear".to_string()
        }
        Mode::Edit => {
            "EDIT MODE | Enter: save | Esc: cancel | ←→: cursor".to_string()
        }
        _ => {
            // The delete affordance only appears once something is
            // selected.
            if app.store.selected_count() > 0 {
                format!(
                    "{} selected | d: delete selected | Space: select | Esc: clear selection",
                    app.store.selected_count()
                )
            } else {
                "↑↓/j/k: navigate | Enter: done | e: edit | a: add | Space: select | /: search | ?: help | q: quit"
                    .to_string()
            }
        }
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_edit_modal(frame: &mut Frame, app: &App) {
    let buffer = app
        .store
        .edit_draft()
        .map(|draft| draft.text.as_str())
        .unwrap_or("");

    let modal = Paragraph::new(with_cursor(buffer, app.edit_cursor.pos))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Edit task ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White));

    let area = centered_rect(60, 20, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "taskpad - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move cursor up/down",
        "  Enter             Toggle task completion",
        "",
        "TASKS:",
        "  a                 Focus the new-task field (Enter adds, Esc leaves)",
        "  e                 Edit task under cursor",
        "",
        "BULK DELETE:",
        "  Space             Select/deselect task",
        "  d                 Delete all selected tasks",
        "",
        "FILTER:",
        "  /                 Type a search term (case-insensitive)",
        "  Esc               Clear selection, then clear filter",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit (the list is not saved)",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(80, 70, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

// Cursor position is a byte offset kept on a char boundary by TextCursor.
fn with_cursor(buffer: &str, pos: usize) -> String {
    let (before, after) = buffer.split_at(pos.min(buffer.len()));
    format!("{}█{}", before, after)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: ratatui::layout::Rect) -> ratatui::layout::Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
