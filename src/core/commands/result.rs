//! Command execution result type.

use crate::models::OutputLine;

/// Session-level side effect requested by a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// Truncate the output log
    Clear,
    /// Reload the whole page after `delay_ms`
    Reboot { delay_ms: u32 },
}

/// Result of executing a command.
///
/// Commands produce output and optionally request a side effect that the
/// session (or the UI around it) carries out.
#[derive(Clone, Debug)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    pub effect: Option<SessionEffect>,
}

impl CommandResult {
    /// Create a result with just output, no side effect.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effect: None,
        }
    }

    /// Create a result carrying a side effect and optional output.
    pub fn with_effect(lines: Vec<OutputLine>, effect: SessionEffect) -> Self {
        Self {
            output: lines,
            effect: Some(effect),
        }
    }

    /// Create an empty result (no output, no side effect).
    pub fn empty() -> Self {
        Self {
            output: vec![],
            effect: None,
        }
    }
}
