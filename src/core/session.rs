//! Terminal session: the single owner of all terminal state.
//!
//! A [`TerminalSession`] bundles the virtual filesystem, command history,
//! output log, boot sequencer and input mode. The UI holds exactly one and
//! drives it through [`TerminalSession::start_boot`],
//! [`TerminalSession::resume_boot`] and [`TerminalSession::handle_key`].

use chrono::{DateTime, Local};

use crate::core::boot::{BootSequencer, BootStep, BootTicket};
use crate::core::commands::{Command, ExecContext, SessionEffect, execute_command};
use crate::core::history::HistoryBuffer;
use crate::core::output::OutputLog;
use crate::core::parser::parse_input;
use crate::core::VirtualFs;
use crate::models::{InputMode, OutputLine};

/// Keys the input controller distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    /// Anything else; left to the browser's default text entry
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            _ => Self::Other,
        }
    }

    /// Map a keydown. Keys pressed while an IME composition is open belong
    /// to the composition and map to `Other`.
    pub fn from_keydown(name: &str, composing: bool) -> Self {
        if composing {
            Self::Other
        } else {
            Self::from_name(name)
        }
    }
}

/// What the input field should do after a keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// New content for the input field; `None` keeps the current text
    pub replace_input: Option<String>,
    /// Suppress the browser's default handling of the key
    pub prevent_default: bool,
    /// Effect the UI has to carry out (only `Reboot` reaches this far)
    pub effect: Option<SessionEffect>,
}

impl KeyResponse {
    pub fn ignored() -> Self {
        Self::default()
    }
}

/// Outcome of a boot resumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootProgress {
    /// A line was emitted; resume again with this ticket after the line delay.
    Continue(BootTicket),
    /// Boot finished and input is enabled.
    Finished,
}

pub struct TerminalSession {
    fs: VirtualFs,
    history: HistoryBuffer,
    output: OutputLog,
    boot: BootSequencer,
    input_mode: InputMode,
    prompt: String,
}

impl TerminalSession {
    pub fn new(fs: VirtualFs, prompt: impl Into<String>) -> Self {
        Self {
            fs,
            history: HistoryBuffer::new(),
            output: OutputLog::new(),
            boot: BootSequencer::new(),
            input_mode: InputMode::Disabled,
            prompt: prompt.into(),
        }
    }

    // -- Boot --

    /// Begin a fresh boot run.
    ///
    /// Clears the output, disables input and invalidates every ticket from
    /// earlier runs. History is kept.
    pub fn start_boot(&mut self, lines: Vec<String>) -> BootTicket {
        log::info!("boot: starting sequence of {} lines", lines.len());
        self.output.clear();
        self.input_mode = InputMode::Disabled;
        self.boot.start(lines)
    }

    /// Run one boot step for `ticket`.
    ///
    /// Returns `None` if the ticket is stale or the run already finished.
    pub fn resume_boot(&mut self, ticket: BootTicket) -> Option<BootProgress> {
        match self.boot.resume(ticket)? {
            BootStep::Line { text, next } => {
                self.output.push(OutputLine::text(text));
                Some(BootProgress::Continue(next))
            }
            BootStep::Ready => {
                self.input_mode = InputMode::Enabled;
                log::info!("boot: complete, input enabled");
                Some(BootProgress::Finished)
            }
        }
    }

    // -- Input --

    /// React to a keystroke with `input` as the current field content.
    pub fn handle_key(&mut self, key: Key, input: &str) -> KeyResponse {
        self.handle_key_at(key, input, Local::now())
    }

    /// [`handle_key`](Self::handle_key) with an explicit wall-clock time.
    pub fn handle_key_at(&mut self, key: Key, input: &str, now: DateTime<Local>) -> KeyResponse {
        if self.input_mode == InputMode::Disabled {
            return KeyResponse::ignored();
        }
        match key {
            Key::Enter => KeyResponse {
                replace_input: Some(String::new()),
                prevent_default: false,
                effect: self.submit(input, now),
            },
            Key::ArrowUp => KeyResponse {
                replace_input: self.history.recall_previous().map(str::to_string),
                prevent_default: true,
                effect: None,
            },
            Key::ArrowDown => KeyResponse {
                replace_input: self.history.recall_next().map(str::to_string),
                prevent_default: true,
                effect: None,
            },
            Key::Other => KeyResponse::ignored(),
        }
    }

    /// Echo, record and dispatch one line of input.
    fn submit(&mut self, input: &str, now: DateTime<Local>) -> Option<SessionEffect> {
        let line = input.trim();
        self.history.push(line);
        self.output.echo(&self.prompt, line);

        let parsed = parse_input(line)?;
        log::debug!("dispatch: {} {:?}", parsed.name, parsed.args);
        let cmd = Command::parse(&parsed.name, &parsed.args);
        let result = execute_command(cmd, &ExecContext { fs: &self.fs, now });
        self.output.append(result.output);

        match result.effect {
            Some(SessionEffect::Clear) => {
                self.output.clear();
                None
            }
            other => other,
        }
    }

    // -- Accessors --

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn output(&self) -> &[OutputLine] {
        self.output.lines()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[cfg(test)]
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    #[cfg(test)]
    pub fn boot_state(&self) -> crate::core::boot::BootState {
        self.boot.state()
    }
}
