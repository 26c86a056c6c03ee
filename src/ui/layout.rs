use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_status: bool) -> AppLayout {
    let status_height = if show_status { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Tab bar
            Constraint::Min(5),                // Active view
            Constraint::Length(status_height), // Status bar
        ])
        .split(area);

    AppLayout {
        tab_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}
