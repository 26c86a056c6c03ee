use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Demo of the two reusable primitives: a counter that resets to its
/// construction value and an independent toggle.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    render_counter(frame, chunks[0], state);
    render_toggle(frame, chunks[1], state);
}

fn render_counter(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" SimpleCounter (initial 10) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Value  ", Theme::label()),
            Span::styled(state.demo.counter.count().to_string(), Theme::count_value()),
        ]),
        Line::from(Span::styled(
            " + increment   - decrement   r reset to initial",
            Theme::history_index(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_toggle(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Toggle (initial on) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (label, style) = if state.demo.toggle.value() {
        ("On", Theme::toggle_on())
    } else {
        ("Off", Theme::toggle_off())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" State  ", Theme::label()),
            Span::styled(label, style),
        ]),
        Line::from(Span::styled(" t to flip", Theme::history_index())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
