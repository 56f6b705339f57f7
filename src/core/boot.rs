//! Boot sequence state machine.
//!
//! The sequencer emits one line per resumption and flips to [`BootState::Ready`]
//! on the resumption after the last line. It knows nothing about time: the
//! caller schedules each resumption and hands back the [`BootTicket`] it was
//! given. Every call to [`BootSequencer::start`] begins a new epoch, so
//! tickets from an earlier run are rejected.

/// Progress of the current boot run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootState {
    /// Index of the next line to emit
    Booting(usize),
    Ready,
}

/// Permission to resume a specific boot run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootTicket {
    epoch: u64,
}

/// Result of a successful resumption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootStep {
    /// A line to display; resume again with `next` after the line delay.
    Line { text: String, next: BootTicket },
    /// The sequence is exhausted and input may be enabled.
    Ready,
}

#[derive(Clone, Debug)]
pub struct BootSequencer {
    lines: Vec<String>,
    state: BootState,
    epoch: u64,
}

impl BootSequencer {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            state: BootState::Booting(0),
            epoch: 0,
        }
    }

    /// Begin a new run over `lines` from line 0.
    ///
    /// Any ticket handed out before this call becomes stale.
    pub fn start(&mut self, lines: Vec<String>) -> BootTicket {
        self.epoch = self.epoch.wrapping_add(1);
        self.lines = lines;
        self.state = BootState::Booting(0);
        BootTicket { epoch: self.epoch }
    }

    /// Advance the current run by one step.
    ///
    /// Returns `None` for a stale ticket or a run that already finished.
    pub fn resume(&mut self, ticket: BootTicket) -> Option<BootStep> {
        if ticket.epoch != self.epoch {
            return None;
        }
        let BootState::Booting(index) = self.state else {
            return None;
        };
        match self.lines.get(index) {
            Some(text) => {
                self.state = BootState::Booting(index + 1);
                Some(BootStep::Line {
                    text: text.clone(),
                    next: ticket,
                })
            }
            None => {
                self.state = BootState::Ready;
                Some(BootStep::Ready)
            }
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> BootState {
        self.state
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        self.state == BootState::Ready
    }
}

impl Default for BootSequencer {
    fn default() -> Self {
        Self::new()
    }
}
