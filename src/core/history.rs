//! Command history with a recall cursor.

/// Previously submitted commands plus the position used by arrow-key recall.
///
/// The cursor ranges over `0..=len`; `len` is the "fresh input" position
/// just past the newest entry. Recall only moves the cursor and never
/// touches the stored entries.
#[derive(Clone, Debug, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command.
    ///
    /// The entry is trimmed; blank entries are dropped. The cursor is reset
    /// to the fresh position either way.
    pub fn push(&mut self, entry: &str) {
        let entry = entry.trim();
        if !entry.is_empty() {
            self.entries.push(entry.to_string());
        }
        self.cursor = self.entries.len();
    }

    /// Step back to the previous entry.
    ///
    /// Returns `None` when already at the oldest entry (or the history is
    /// empty); the caller keeps its current input in that case.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward to the next entry.
    ///
    /// Moving past the newest entry returns `Some("")` once to clear the
    /// input; after that the call is a no-op returning `None`.
    pub fn recall_next(&mut self) -> Option<&str> {
        let len = self.entries.len();
        if self.cursor >= len {
            return None;
        }
        self.cursor += 1;
        if self.cursor == len {
            Some("")
        } else {
            self.entries.get(self.cursor).map(String::as_str)
        }
    }

    // -- Test accessors --

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> HistoryBuffer {
        let mut history = HistoryBuffer::new();
        history.push("a");
        history.push("b");
        history.push("c");
        history
    }

    #[test]
    fn test_push_trims_and_skips_blank() {
        let mut history = HistoryBuffer::new();
        history.push("  ls -l  ");
        history.push("   ");
        history.push("");
        assert_eq!(history.entries(), &["ls -l".to_string()]);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_push_keeps_repeats() {
        let mut history = HistoryBuffer::new();
        history.push("ls");
        history.push("ls");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_recall_previous_walks_back_to_floor() {
        let mut history = abc();
        assert_eq!(history.recall_previous(), Some("c"));
        assert_eq!(history.recall_previous(), Some("b"));
        assert_eq!(history.recall_previous(), Some("a"));
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_recall_next_clears_once_then_noop() {
        let mut history = abc();
        for _ in 0..4 {
            history.recall_previous();
        }
        assert_eq!(history.recall_next(), Some("b"));
        assert_eq!(history.recall_next(), Some("c"));
        assert_eq!(history.recall_next(), Some(""));
        assert_eq!(history.cursor(), 3);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), 3);
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut history = HistoryBuffer::new();
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut history = abc();
        history.recall_previous();
        history.recall_previous();
        history.push("d");
        assert_eq!(history.cursor(), 4);
        assert_eq!(history.recall_previous(), Some("d"));
    }

    #[test]
    fn test_recall_does_not_mutate_entries() {
        let mut history = abc();
        history.recall_previous();
        history.recall_next();
        history.recall_next();
        assert_eq!(history.entries(), &["a", "b", "c"]);
    }
}
