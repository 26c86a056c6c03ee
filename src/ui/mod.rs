mod counter;
mod hooks;
mod layout;
mod status_bar;
mod tab_bar;
mod theme;
mod todo;

use crate::app::state::{AppState, Tab};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.show_hints);

    tab_bar::render(frame, app_layout.tab_bar, state);

    match state.active_tab {
        Tab::Counter => counter::render(frame, app_layout.content, state),
        Tab::Todos => todo::render(frame, app_layout.content, state),
        Tab::Hooks => hooks::render(frame, app_layout.content, state),
    }

    if state.config.ui.show_hints {
        status_bar::render(frame, app_layout.status_bar, state);
    }
}
