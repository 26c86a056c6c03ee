use crossterm::event::Event as CrosstermEvent;

pub type TodoId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Tick for time-based state and UI refresh
    Tick,
}
