//! Up/Down recall of previously submitted lines.
//!
//! Independent of the transcript: `clear` empties the screen but the
//! history survives.

/// Submitted lines, oldest first, plus a recall cursor.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    /// `None` means "no selection" (the user is editing a fresh line).
    cursor: Option<usize>,
    /// What was in the input buffer when recall started.
    draft: String,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and drop any selection.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.reset_cursor();
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
        self.draft.clear();
    }

    /// Step toward older entries. Returns the new buffer contents, or
    /// `None` when there is nothing to recall. Clamps at the oldest entry.
    pub fn up(&mut self, current_input: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => {
                self.draft = current_input.to_string();
                self.entries.len() - 1
            }
        };
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }

    /// Step toward newer entries. Past the newest entry the selection is
    /// dropped and the saved draft comes back. `None` when nothing is
    /// selected.
    pub fn down(&mut self) -> Option<String> {
        let cursor = self.cursor?;
        if cursor + 1 < self.entries.len() {
            self.cursor = Some(cursor + 1);
            Some(self.entries[cursor + 1].clone())
        } else {
            self.cursor = None;
            Some(std::mem::take(&mut self.draft))
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
