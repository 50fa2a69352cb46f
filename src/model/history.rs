//! Command history with Up/Down recall.
//!
//! Entries are kept in submission order, never deduplicated and never
//! trimmed. Browsing only moves a cursor; the entries themselves are
//! immutable once pushed.

/// Submitted commands plus the recall cursor.
///
/// The cursor counts back from the most recent entry: `Some(0)` is the
/// newest command, `Some(len - 1)` the oldest. `None` means the visitor is
/// on the live, editable line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command and return to the live line.
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        self.cursor = None;
    }

    /// Leave browsing mode without touching the entries.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Step one entry older.
    ///
    /// Returns the text the input line should now hold, or `None` when
    /// there is nothing to recall. Stepping past the oldest entry keeps
    /// returning the oldest entry.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let oldest = self.entries.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(c) => (c + 1).min(oldest),
        };
        self.cursor = Some(next);
        self.entry_at_cursor()
    }

    /// Step one entry newer.
    ///
    /// From the newest entry this returns to the live line and yields an
    /// empty string; when not browsing it is a no-op and yields `None`.
    pub fn recall_newer(&mut self) -> Option<&str> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some("")
            }
            Some(c) => {
                self.cursor = Some(c - 1);
                self.entry_at_cursor()
            }
        }
    }

    fn entry_at_cursor(&self) -> Option<&str> {
        let cursor = self.cursor?;
        let index = self.entries.len().checked_sub(1 + cursor)?;
        self.entries.get(index).map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
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
