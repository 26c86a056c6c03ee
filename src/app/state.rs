use crate::app::counter::CounterState;
use crate::app::primitives::DemoState;
use crate::app::todo::TodoState;
use crate::config::{AppConfig, StartTab};

/// The fixed set of selectable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Counter,
    Todos,
    Hooks,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Counter, Tab::Todos, Tab::Hooks];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Counter => "Counter",
            Tab::Todos => "Todos",
            Tab::Hooks => "Hooks",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Counter => Tab::Todos,
            Tab::Todos => Tab::Hooks,
            Tab::Hooks => Tab::Counter,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Counter => Tab::Hooks,
            Tab::Todos => Tab::Counter,
            Tab::Hooks => Tab::Todos,
        }
    }
}

impl From<StartTab> for Tab {
    fn from(t: StartTab) -> Self {
        match t {
            StartTab::Counter => Tab::Counter,
            StartTab::Todos => Tab::Todos,
            StartTab::Hooks => Tab::Hooks,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub active_tab: Tab,
    pub counter: CounterState,
    pub todos: TodoState,
    pub demo: DemoState,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let active_tab = config.behavior.start_tab.into();
        Self {
            config,
            active_tab,
            counter: CounterState::new(),
            todos: TodoState::new(),
            demo: DemoState::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Switch the active view. Views are mount-scoped: switching away
    /// discards the old view's state, so returning to it starts fresh.
    /// Re-selecting the already-active tab is not a remount.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        match self.active_tab {
            Tab::Counter => self.counter = CounterState::new(),
            Tab::Todos => self.todos = TodoState::new(),
            Tab::Hooks => self.demo = DemoState::new(),
        }
        self.active_tab = tab;
        self.dirty = true;
    }

    pub fn select_next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn select_prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_default_tab_is_counter() {
        assert_eq!(state().active_tab, Tab::Counter);
    }

    #[test]
    fn test_tab_cycle_covers_all() {
        let mut tab = Tab::Counter;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Counter);
        assert_eq!(Tab::Counter.next().prev(), Tab::Counter);
    }

    #[test]
    fn test_switching_away_remounts_counter() {
        let mut s = state();
        for _ in 0..5 {
            s.counter.increment();
        }
        assert_eq!(s.counter.count, 5);
        s.select_tab(Tab::Todos);
        s.select_tab(Tab::Counter);
        assert_eq!(s.counter.count, 0);
        assert!(s.counter.history.is_empty());
    }

    #[test]
    fn test_switching_away_stops_counter_timer() {
        let mut s = state();
        s.counter.toggle_running();
        s.select_tab(Tab::Hooks);
        assert!(!s.counter.is_running);
    }

    #[test]
    fn test_reselecting_active_tab_keeps_state() {
        let mut s = state();
        s.counter.increment();
        s.select_tab(Tab::Counter);
        assert_eq!(s.counter.count, 1);
    }

    #[test]
    fn test_switching_away_remounts_todos() {
        let mut s = state();
        s.select_tab(Tab::Todos);
        s.todos.add_todo("task");
        s.select_tab(Tab::Hooks);
        s.select_tab(Tab::Todos);
        assert_eq!(s.todos.total(), 0);
    }
}
