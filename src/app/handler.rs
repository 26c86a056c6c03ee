use crate::app::event::AppEvent;
use crate::app::state::{AppState, Tab};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => handle_tick(state, Instant::now()),
    }
}

fn handle_tick(state: &mut AppState, now: Instant) {
    if state.counter.advance(now) > 0 {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key);
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
        }
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    match key.code {
        KeyCode::Tab => {
            state.select_next_tab();
            return;
        }
        KeyCode::BackTab => {
            state.select_prev_tab();
            return;
        }
        _ => {}
    }

    // On the todo view printable characters belong to the input line, so
    // quit and direct tab selection only apply elsewhere.
    if state.active_tab != Tab::Todos {
        match key.code {
            KeyCode::Char('q') => {
                state.should_quit = true;
                return;
            }
            KeyCode::Char('1') => {
                state.select_tab(Tab::Counter);
                return;
            }
            KeyCode::Char('2') => {
                state.select_tab(Tab::Todos);
                return;
            }
            KeyCode::Char('3') => {
                state.select_tab(Tab::Hooks);
                return;
            }
            _ => {}
        }
    }

    match state.active_tab {
        Tab::Counter => handle_counter_key(state, key),
        Tab::Todos => handle_todo_key(state, key),
        Tab::Hooks => handle_hooks_key(state, key),
    }
}

fn handle_counter_key(state: &mut AppState, key: KeyEvent) {
    let counter = &mut state.counter;
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => counter.increment(),
        KeyCode::Char('-') | KeyCode::Char('_') => counter.decrement(),
        KeyCode::Char('s') | KeyCode::Char(' ') => counter.toggle_running(),
        KeyCode::Char('r') => counter.reset(),
        // The key layer is the "numeric input, min 1" control: it never
        // hands set_step anything below 1.
        KeyCode::Char(']') => counter.set_step(counter.step + 1),
        KeyCode::Char('[') => counter.set_step((counter.step - 1).max(1)),
        _ => {}
    }
}

fn handle_todo_key(state: &mut AppState, key: KeyEvent) {
    let todos = &mut state.todos;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('w') {
            todos.input.delete_word_back();
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            // Whitespace-only submissions are a no-op and keep the input
            // as typed; a real submission clears it.
            if !todos.input.text.trim().is_empty() {
                let text = todos.input.take_text();
                todos.add_todo(&text);
            }
        }
        KeyCode::Backspace => todos.input.delete_back(),
        KeyCode::Delete => {
            if let Some(id) = todos.selected_id() {
                todos.delete_todo(id);
            }
        }
        KeyCode::Left => todos.input.move_left(),
        KeyCode::Right => todos.input.move_right(),
        KeyCode::Home => todos.input.move_home(),
        KeyCode::End => todos.input.move_end(),
        KeyCode::Up => todos.select_up(),
        KeyCode::Down => todos.select_down(),
        // Space toggles the selected item when the input line is empty,
        // otherwise it is just text.
        KeyCode::Char(' ') if todos.input.text.is_empty() => {
            if let Some(id) = todos.selected_id() {
                todos.toggle_todo(id);
            }
        }
        KeyCode::Char(c) => todos.input.insert_char(c),
        _ => {}
    }
}

fn handle_hooks_key(state: &mut AppState, key: KeyEvent) {
    let demo = &mut state.demo;
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => demo.counter.increment(),
        KeyCode::Char('-') | KeyCode::Char('_') => demo.counter.decrement(),
        KeyCode::Char('r') => demo.counter.reset(),
        KeyCode::Char('t') | KeyCode::Char(' ') => demo.toggle.toggle(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for tab in Tab::ALL {
            let mut s = state();
            s.select_tab(tab);
            handle_key(
                &mut s,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            );
            assert!(s.should_quit);
        }
    }

    #[test]
    fn test_tab_key_cycles_views() {
        let mut s = state();
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.active_tab, Tab::Todos);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.active_tab, Tab::Hooks);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.active_tab, Tab::Counter);
        press(&mut s, KeyCode::BackTab);
        assert_eq!(s.active_tab, Tab::Hooks);
    }

    #[test]
    fn test_digit_selects_tab_outside_todos() {
        let mut s = state();
        press(&mut s, KeyCode::Char('3'));
        assert_eq!(s.active_tab, Tab::Hooks);
        press(&mut s, KeyCode::Char('1'));
        assert_eq!(s.active_tab, Tab::Counter);
    }

    #[test]
    fn test_digits_are_text_on_todo_view() {
        let mut s = state();
        s.select_tab(Tab::Todos);
        press(&mut s, KeyCode::Char('1'));
        assert_eq!(s.active_tab, Tab::Todos);
        assert_eq!(s.todos.input.text, "1");
    }

    #[test]
    fn test_counter_keys() {
        let mut s = state();
        press(&mut s, KeyCode::Char('+'));
        press(&mut s, KeyCode::Char(']'));
        press(&mut s, KeyCode::Char('+'));
        press(&mut s, KeyCode::Char('-'));
        assert_eq!(s.counter.count, 1);
        assert_eq!(s.counter.history, vec![1, 3, 1]);
        press(&mut s, KeyCode::Char('r'));
        assert_eq!(s.counter.count, 0);
        assert_eq!(s.counter.step, 1);
    }

    #[test]
    fn test_step_never_drops_below_one() {
        let mut s = state();
        press(&mut s, KeyCode::Char('['));
        press(&mut s, KeyCode::Char('['));
        assert_eq!(s.counter.step, 1);
    }

    #[test]
    fn test_start_pause_toggle() {
        let mut s = state();
        press(&mut s, KeyCode::Char('s'));
        assert!(s.counter.is_running);
        press(&mut s, KeyCode::Char('s'));
        assert!(!s.counter.is_running);
    }

    #[test]
    fn test_todo_submit_clears_input() {
        let mut s = state();
        s.select_tab(Tab::Todos);
        for c in "Buy milk".chars() {
            press(&mut s, KeyCode::Char(c));
        }
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.todos.total(), 1);
        assert_eq!(s.todos.items[0].text, "Buy milk");
        assert_eq!(s.todos.input.text, "");
    }

    #[test]
    fn test_todo_whitespace_submit_is_noop() {
        let mut s = state();
        s.select_tab(Tab::Todos);
        // A leading space with an empty input is the toggle binding and a
        // no-op on an empty list; pad around real whitespace instead.
        press(&mut s, KeyCode::Char('x'));
        press(&mut s, KeyCode::Backspace);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.todos.total(), 0);
    }

    #[test]
    fn test_todo_toggle_and_delete_selected() {
        let mut s = state();
        s.select_tab(Tab::Todos);
        s.todos.add_todo("a");
        s.todos.add_todo("b");
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Char(' '));
        assert!(s.todos.items[1].completed);
        press(&mut s, KeyCode::Delete);
        assert_eq!(s.todos.total(), 1);
        assert_eq!(s.todos.items[0].text, "a");
    }

    #[test]
    fn test_hooks_keys() {
        let mut s = state();
        s.select_tab(Tab::Hooks);
        press(&mut s, KeyCode::Char('+'));
        press(&mut s, KeyCode::Char('+'));
        press(&mut s, KeyCode::Char('-'));
        assert_eq!(s.demo.counter.count(), 11);
        press(&mut s, KeyCode::Char('r'));
        assert_eq!(s.demo.counter.count(), 10);
        press(&mut s, KeyCode::Char('t'));
        assert!(!s.demo.toggle.value());
    }

    #[test]
    fn test_tick_advances_running_counter() {
        use std::time::Duration;
        let mut s = state();
        s.counter.toggle_running();
        s.dirty = false;
        handle_tick(&mut s, Instant::now() + Duration::from_secs(2));
        assert_eq!(s.counter.count, 2);
        assert!(s.dirty);
    }
}
