//! Counter unit: a count, an adjustable step, an append-only history of
//! every value the count has taken, and an optional once-per-second
//! auto-increment.
//!
//! The auto-increment is not a free-running task. `next_fire` holds the
//! deadline of the next tick and is `Some` exactly while `is_running`; the
//! event loop's tick handler compares it against `Instant::now()`. Dropping
//! or resetting the state disarms it, so a timer can never outlive its view.

use std::time::{Duration, Instant};

pub const AUTO_INCREMENT_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct CounterState {
    pub count: i64,
    pub step: i64,
    pub is_running: bool,
    pub history: Vec<i64>,
    next_fire: Option<Instant>,
}

impl CounterState {
    pub fn new() -> Self {
        Self {
            count: 0,
            step: 1,
            is_running: false,
            history: Vec::new(),
            next_fire: None,
        }
    }

    pub fn increment(&mut self) {
        self.count += self.step;
        self.history.push(self.count);
    }

    pub fn decrement(&mut self) {
        self.count -= self.step;
        self.history.push(self.count);
    }

    /// Replace the step. Accepts any value; the key handler clamps its own
    /// adjustments to >= 1.
    pub fn set_step(&mut self, step: i64) {
        self.step = step;
        // Changing the step while running restarts the period.
        if self.is_running {
            self.arm(Instant::now());
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.arm(Instant::now());
        } else {
            self.next_fire = None;
        }
    }

    /// Replace the whole state with the default snapshot.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn arm(&mut self, now: Instant) {
        self.next_fire = Some(now + AUTO_INCREMENT_PERIOD);
    }

    /// Apply every auto-increment period that has elapsed by `now`.
    /// Returns how many fired, so the caller can decide whether to redraw.
    ///
    /// Each fire is the same transition as `increment()`, using the step
    /// current at that moment. Catches up if ticks were delayed (e.g. the
    /// terminal was suspended), keeping history length equal to elapsed
    /// periods.
    pub fn advance(&mut self, now: Instant) -> usize {
        if !self.is_running {
            return 0;
        }
        let mut fired = 0;
        while let Some(deadline) = self.next_fire {
            if now < deadline {
                break;
            }
            self.increment();
            self.next_fire = Some(deadline + AUTO_INCREMENT_PERIOD);
            fired += 1;
        }
        fired
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_sum_of_deltas() {
        let mut c = CounterState::new();
        c.increment();
        c.increment();
        c.set_step(5);
        c.increment();
        c.decrement();
        assert_eq!(c.count, 1 + 1 + 5 - 5);
        assert_eq!(c.history, vec![1, 2, 7, 2]);
    }

    #[test]
    fn test_history_tracks_every_change() {
        let mut c = CounterState::new();
        for _ in 0..10 {
            c.increment();
        }
        assert_eq!(c.history.len(), 10);
        assert_eq!(c.history.last(), Some(&c.count));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut c = CounterState::new();
        c.set_step(7);
        c.increment();
        c.toggle_running();
        c.reset();
        assert_eq!(c.count, 0);
        assert_eq!(c.step, 1);
        assert!(!c.is_running);
        assert!(c.history.is_empty());
        assert_eq!(c.advance(Instant::now()), 0);
    }

    #[test]
    fn test_advance_noop_while_stopped() {
        let mut c = CounterState::new();
        let fired = c.advance(Instant::now() + Duration::from_secs(10));
        assert_eq!(fired, 0);
        assert_eq!(c.count, 0);
        assert!(c.history.is_empty());
    }

    #[test]
    fn test_advance_fires_once_per_elapsed_period() {
        let mut c = CounterState::new();
        c.toggle_running();
        let start = Instant::now();
        let fired = c.advance(start + Duration::from_secs(3));
        assert_eq!(fired, 3);
        assert_eq!(c.count, 3);
        assert_eq!(c.history, vec![1, 2, 3]);
    }

    #[test]
    fn test_advance_uses_current_step() {
        let mut c = CounterState::new();
        c.toggle_running();
        c.set_step(10);
        let now = Instant::now();
        assert_eq!(c.advance(now + Duration::from_secs(3)), 3);
        assert_eq!(c.count, 30);
    }

    #[test]
    fn test_pause_disarms_timer() {
        let mut c = CounterState::new();
        c.toggle_running();
        c.toggle_running();
        assert!(!c.is_running);
        assert_eq!(c.advance(Instant::now() + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_partial_period_does_not_fire() {
        let mut c = CounterState::new();
        let start = Instant::now();
        c.toggle_running();
        assert_eq!(c.advance(start + Duration::from_millis(500)), 0);
        assert_eq!(c.count, 0);
    }
}
