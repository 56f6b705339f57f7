//! Append-only terminal output log.

use crate::models::OutputLine;

/// Rendered terminal lines in display order.
///
/// Lines are only ever appended; [`OutputLog::clear`] is the single way to
/// remove them.
#[derive(Clone, Debug, Default)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the echo of a submitted command.
    ///
    /// `input` is stored as text; an empty input echoes just the prompt.
    pub fn echo(&mut self, prompt: &str, input: &str) {
        self.lines.push(OutputLine::command(prompt, input));
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn append(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.lines.extend(lines);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
