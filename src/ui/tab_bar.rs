use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(" hooklab ", Theme::title())];

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let active = *tab == state.active_tab;
        let style = if active {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        let marker = if active { "▸" } else { " " };
        spans.push(Span::styled(
            format!(" {}{} {} ", marker, i + 1, tab.label()),
            style,
        ));
        if i + 1 < Tab::ALL.len() {
            spans.push(Span::styled("│", Theme::border()));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
