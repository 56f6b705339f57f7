//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Visual style of a fragment inside a styled line.
///
/// This is the complete set of styles the renderer knows. Text never
/// selects a style by its content; only code in this crate picks one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentStyle {
    /// Highlight color (command names, prompts)
    Accent,
    /// Dimmed secondary text
    Dim,
}

/// A run of literal text with a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub style: FragmentStyle,
}

impl Fragment {
    pub fn new(text: impl Into<String>, style: FragmentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(text, FragmentStyle::Accent)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, FragmentStyle::Dim)
    }
}

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echoed command with prompt and user input
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message (red)
    Error(String),
    /// Sequence of styled fragments
    Styled(Vec<Fragment>),
    /// Multi-line block rendered with line breaks and indentation intact
    Preformatted(String),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    /// Create a new OutputLine with a unique ID
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    /// The line as it would read with all styling removed.
    pub fn plain_text(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } if input.is_empty() => prompt.clone(),
            OutputLineData::Command { prompt, input } => format!("{} {}", prompt, input),
            OutputLineData::Text(s) | OutputLineData::Error(s) | OutputLineData::Preformatted(s) => {
                s.clone()
            }
            OutputLineData::Styled(fragments) => {
                fragments.iter().map(|f| f.text.as_str()).collect()
            }
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn styled(fragments: Vec<Fragment>) -> Self {
        Self::new(OutputLineData::Styled(fragments))
    }

    pub fn preformatted(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Preformatted(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }
}

/// Whether the terminal input reacts to keystrokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Boot sequence still running
    #[default]
    Disabled,
    Enabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("error").data,
            OutputLineData::Error("error".to_string())
        );
        assert_eq!(
            OutputLine::preformatted("a\n  b").data,
            OutputLineData::Preformatted("a\n  b".to_string())
        );
    }

    #[test]
    fn test_command_line() {
        let cmd = OutputLine::command("root@host:~#", "ls -la");
        match cmd.data {
            OutputLineData::Command { prompt, input } => {
                assert_eq!(prompt, "root@host:~#");
                assert_eq!(input, "ls -la");
            }
            _ => panic!("Expected Command variant"),
        }
    }

    #[test]
    fn test_plain_text_projection() {
        let styled = OutputLine::styled(vec![
            Fragment::accent("help"),
            Fragment::dim("  show this list"),
        ]);
        assert_eq!(styled.plain_text(), "help  show this list");
        assert_eq!(OutputLine::command("p#", "").plain_text(), "p#");
        assert_eq!(OutputLine::command("p#", "ls").plain_text(), "p# ls");
    }

    #[test]
    fn test_markup_is_kept_as_data() {
        let line = OutputLine::command("p#", "<b>hi</b>");
        assert_eq!(line.plain_text(), "p# <b>hi</b>");
    }

    #[test]
    fn test_unique_ids() {
        let line1 = OutputLine::text("first");
        let line2 = OutputLine::text("second");
        let line3 = OutputLine::text("first"); // Same content as line1

        // IDs should all be different
        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_ne!(line2.id, line3.id);

        // But content equality works
        assert_eq!(line1.data, line3.data);
    }

    #[test]
    fn test_input_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Disabled);
    }
}
