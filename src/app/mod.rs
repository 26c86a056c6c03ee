//! Core application logic: per-view state, event handling, and transitions.

pub mod counter;
pub mod event;
pub mod handler;
pub mod primitives;
pub mod state;
pub mod todo;
