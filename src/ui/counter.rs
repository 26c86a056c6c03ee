use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(area);

    render_value_panel(frame, chunks[0], state);
    render_history(frame, chunks[1], state);
}

fn render_value_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let counter = &state.counter;

    let block = Block::default()
        .title(" Counter ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (run_label, run_style) = if counter.is_running {
        ("● running", Theme::running())
    } else {
        ("■ paused", Theme::paused())
    };

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Count  ", Theme::label()),
            Span::styled(counter.count.to_string(), Theme::count_value()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  Step   ", Theme::label()),
            Span::styled(counter.step.to_string(), Theme::input_text()),
            Span::styled("   [ and ] to adjust", Theme::history_index()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(run_label, run_style),
            Span::styled("   s to start/pause", Theme::history_index()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let history = &state.counter.history;

    let block = Block::default()
        .title(format!(" History ({}) ", history.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Chronological order; keep the tail visible once it outgrows the panel.
    let visible = inner.height as usize;
    let skip = history.len().saturating_sub(visible);
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, val)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", i + 1), Theme::history_index()),
                Span::styled(val.to_string(), Theme::history_entry()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
