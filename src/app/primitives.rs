//! Reusable state primitives.
//!
//! Each primitive is a small owned struct: consumers hold their own instance,
//! so two views using a `Toggle` never observe each other's flips. No shared
//! or global state.

/// A boolean flip-flop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    value: bool,
}

impl Toggle {
    pub fn new(initial: bool) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn toggle(&mut self) {
        self.value = !self.value;
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new(false)
    }
}

/// An increment/decrement counter that resets to the value it was
/// constructed with, not to zero. The initial value is captured once and
/// never changes for the lifetime of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleCounter {
    count: i64,
    initial: i64,
}

impl SimpleCounter {
    pub fn new(initial: i64) -> Self {
        Self {
            count: initial,
            initial,
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    pub fn reset(&mut self) {
        self.count = self.initial;
    }
}

impl Default for SimpleCounter {
    fn default() -> Self {
        Self::new(0)
    }
}

/// State for the primitives demo view: one counter starting at 10 and one
/// toggle starting on. Pure composition, no logic of its own.
#[derive(Debug, Clone, Copy)]
pub struct DemoState {
    pub counter: SimpleCounter,
    pub toggle: Toggle,
}

impl DemoState {
    pub fn new() -> Self {
        Self {
            counter: SimpleCounter::new(10),
            toggle: Toggle::new(true),
        }
    }
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        let mut t = Toggle::new(true);
        for _ in 0..4 {
            t.toggle();
        }
        assert!(t.value());
        t.toggle();
        assert!(!t.value());
    }

    #[test]
    fn test_toggle_default_is_off() {
        assert!(!Toggle::default().value());
    }

    #[test]
    fn test_counter_resets_to_initial() {
        let mut c = SimpleCounter::new(10);
        c.increment();
        c.increment();
        c.increment();
        c.decrement();
        assert_eq!(c.count(), 12);
        c.reset();
        assert_eq!(c.count(), 10);
    }

    #[test]
    fn test_counter_goes_negative() {
        let mut c = SimpleCounter::new(0);
        c.decrement();
        c.decrement();
        assert_eq!(c.count(), -2);
        c.reset();
        assert_eq!(c.count(), 0);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = SimpleCounter::new(5);
        let b = SimpleCounter::new(5);
        a.increment();
        assert_eq!(a.count(), 6);
        assert_eq!(b.count(), 5);
    }
}
