use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints: &[(&str, &str)] = match state.active_tab {
        Tab::Counter => &[
            ("+/-", "count"),
            ("[/]", "step"),
            ("s", "start/pause"),
            ("r", "reset"),
        ],
        Tab::Todos => &[
            ("Enter", "add"),
            ("↑/↓", "select"),
            ("Space", "toggle"),
            ("Del", "delete"),
        ],
        Tab::Hooks => &[("+/-", "count"), ("r", "reset"), ("t", "flip")],
    };

    let mut parts: Vec<Span> = Vec::new();
    for (key, desc) in hints {
        parts.push(Span::styled(format!(" {}", key), Theme::hint_key()));
        parts.push(Span::styled(format!(" {} ", desc), Theme::status_bar()));
    }
    parts.push(Span::styled(" Tab", Theme::hint_key()));
    parts.push(Span::styled(" switch ", Theme::status_bar()));
    parts.push(Span::styled(" q", Theme::hint_key()));
    parts.push(Span::styled(" quit ", Theme::status_bar()));

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
