use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn count_value() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn running() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn paused() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn history_entry() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn history_index() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn todo_pending() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn todo_done() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn todo_selected() -> Style {
        Style::default().bg(Color::Indexed(236))
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn prompt() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn toggle_on() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn toggle_off() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
