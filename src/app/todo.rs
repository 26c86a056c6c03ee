//! Todo unit: an ordered list of items with completion flags, plus the line
//! editor for entering new items.
//!
//! Ids come from a monotonic per-list counter rather than a wall-clock
//! timestamp, so two items created back-to-back can never collide.

use crate::app::event::TodoId;
use chrono::Local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

#[derive(Debug)]
pub struct TodoState {
    pub items: Vec<Todo>,
    pub input: InputState,
    /// List cursor for keyboard toggle/delete. Clamped after every removal.
    pub selected: usize,
    next_id: TodoId,
}

impl TodoState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            input: InputState::new(),
            selected: 0,
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> TodoId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a new item, unless the trimmed text is empty (silent no-op).
    pub fn add_todo(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let id = self.allocate_id();
        self.items.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
            created_at: Local::now().format("%H:%M").to_string(),
        });
    }

    /// Flip the completion flag of the matching item. Unknown ids are
    /// silently ignored.
    pub fn toggle_todo(&mut self, id: TodoId) {
        if let Some(todo) = self.items.iter_mut().find(|t| t.id == id) {
            todo.completed = !todo.completed;
        }
    }

    /// Remove the matching item. Unknown ids are silently ignored.
    pub fn delete_todo(&mut self, id: TodoId) {
        self.items.retain(|t| t.id != id);
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.items.get(self.selected).map(|t| t.id)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    // Derived values, recomputed on every call. Never cached.

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-line text editor. Cursor is a byte offset, always on a char
/// boundary.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the current text and clear the editor.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        text
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
