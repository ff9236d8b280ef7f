use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Output area grows
            Constraint::Length(1), // Container status
            Constraint::Length(3), // Single-line command input
        ])
        .split(f.area());

    // Only the last messages that fit in the output pane
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let skip_count = app.messages.len().saturating_sub(inner_height);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .skip(skip_count)
        .map(|line| ListItem::new(line.clone()))
        .collect();

    let messages_panel = List::new(messages)
        .block(Block::default().borders(Borders::ALL).title(" Medications "))
        .style(Style::default().fg(Color::White));

    f.render_widget(messages_panel, chunks[0]);
    f.render_widget(status_bar(app), chunks[1]);

    let textarea_rect = chunks[2];
    f.render_widget(&app.textarea, textarea_rect);

    if app.popup_open && !app.suggestions.is_empty() {
        draw_suggestions(f, app, textarea_rect);
    }
}

fn status_bar(app: &App) -> Paragraph<'static> {
    let system = app.shell.system();
    let history = system.history();
    let alerts = system.alerts();

    let text = format!(
        " Medications: {} | History: {}/{} | Refill alerts: {}/{}",
        system.medication_count(),
        history.len(),
        history.capacity(),
        alerts.len(),
        alerts.capacity(),
    );

    Paragraph::new(Line::from(text)).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan),
    )
}

fn draw_suggestions(f: &mut Frame, app: &App, textarea_rect: Rect) {
    let (_, col) = app.textarea.cursor();
    let area = f.area();

    let width = 30.min(area.width);
    let height = (app.suggestions.len() as u16 + 2).min(7).min(area.height);

    // Prefer opening above the input line, it sits at the bottom of the screen
    let popup_x = (textarea_rect.x + col as u16 + 1).min(area.width.saturating_sub(width));
    let popup_y = textarea_rect.y.saturating_sub(height);

    let popup = Rect::new(popup_x, popup_y, width, height);
    f.render_widget(Clear, popup);

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|s| ListItem::new(s.as_str()))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.suggestion_index));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Suggestions"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, popup, &mut state);
}
