use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(3),    // Todo list
            Constraint::Length(1), // Stats line
        ])
        .split(area);

    render_input(frame, chunks[0], state);
    render_list(frame, chunks[1], state);
    render_stats(frame, chunks[2], state);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let input = &state.todos.input;

    let block = Block::default()
        .title(" New todo ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled("❯ ", Theme::prompt()),
        Span::styled(input.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    // Cursor offset: chevron "❯ " plus the display width of the text before
    // the cursor (byte offset is wrong for wide chars).
    let prompt_offset = 2u16;
    let text_offset = input.text[..input.cursor].width() as u16;
    let cursor_x = inner.x + prompt_offset + text_offset;
    frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let todos = &state.todos;

    let block = Block::default()
        .title(" Todos ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if todos.items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " Nothing yet. Type a task and press Enter.",
            Theme::history_index(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = todos
        .items
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let marker = if todo.completed { "[x]" } else { "[ ]" };
            let text_style = if todo.completed {
                Theme::todo_done()
            } else {
                Theme::todo_pending()
            };
            let mut line = Line::from(vec![
                Span::styled(format!(" {} ", marker), Theme::label()),
                Span::styled(todo.text.as_str(), text_style),
                Span::styled(format!("  {}", todo.created_at), Theme::timestamp()),
            ]);
            if i == todos.selected {
                line = line.style(Theme::todo_selected());
            }
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let todos = &state.todos;
    let line = Line::from(vec![
        Span::styled(" Total: ", Theme::label()),
        Span::styled(todos.total().to_string(), Theme::input_text()),
        Span::styled("   Completed: ", Theme::label()),
        Span::styled(todos.completed_count().to_string(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
