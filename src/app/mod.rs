//! The terminal session state machine.
//!
//! [`TerminalSession`] owns everything that changes while a visitor uses
//! the landing terminal: the boot sequencer, the output buffer, the command
//! history and the live input line. Every mutation happens through a method
//! on the session, called from a single event loop; there is no shared
//! state and nothing to lock.

pub mod boot;
pub mod dispatch;

pub use boot::{BootLine, BootProgress, BootSequencer, BootState};
pub use dispatch::DispatchOutcome;

use crate::config::Config;
use crate::content::CommandTable;
use crate::model::{CommandHistory, InputLine, OutputBuffer};
use crate::services::time_source::SharedTimeSource;
use std::time::{Duration, Instant};

pub struct TerminalSession {
    clock: SharedTimeSource,
    prompt: String,
    commands: CommandTable,
    boot: BootSequencer,
    output: OutputBuffer,
    history: CommandHistory,
    input: InputLine,
    torn_down: bool,
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession")
            .field("boot", &self.boot.state())
            .field("output_lines", &self.output.len())
            .field("history", &self.history.len())
            .field("input", &self.input.text())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl TerminalSession {
    /// Build a session from configuration. The boot sequence is not started.
    pub fn new(config: &Config, clock: SharedTimeSource) -> Self {
        Self::with_parts(
            CommandTable::builtin(),
            BootSequencer::builtin(&config.boot),
            config.prompt.clone(),
            clock,
        )
    }

    pub fn with_parts(
        commands: CommandTable,
        boot: BootSequencer,
        prompt: String,
        clock: SharedTimeSource,
    ) -> Self {
        tracing::debug!(
            "Terminal session created: {} aliases, {} screens, {} boot lines",
            commands.aliases().len(),
            commands.registry().len(),
            boot.lines().len()
        );
        Self {
            clock,
            prompt,
            commands,
            boot,
            output: OutputBuffer::new(),
            history: CommandHistory::new(),
            input: InputLine::new(),
            torn_down: false,
        }
    }

    /// Start the boot sequence and emit anything due immediately.
    pub fn start_boot(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let now = self.clock.now();
        if !self.boot.start(now) {
            return false;
        }
        let _ = self.boot.poll(now, &mut self.output);
        true
    }

    /// Fire boot steps that have come due.
    pub fn tick(&mut self) -> BootProgress {
        let now = self.clock.now();
        self.boot.poll(now, &mut self.output)
    }

    /// Dispatch whatever is on the input line and clear it.
    pub fn submit(&mut self) -> DispatchOutcome {
        if !self.accepts_input() {
            return DispatchOutcome::Ignored;
        }
        let raw = self.input.take();
        self.history.reset_cursor();
        self.dispatch(&raw)
    }

    /// Up: put the next older history entry on the input line.
    pub fn recall_older(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.history.recall_older() {
            Some(entry) => {
                self.input.set(entry);
                true
            }
            None => false,
        }
    }

    /// Down: put the next newer entry on the input line, or clear it when
    /// leaving the newest entry.
    pub fn recall_newer(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.history.recall_newer() {
            Some(entry) => {
                self.input.set(entry);
                true
            }
            None => false,
        }
    }

    /// Apply an edit to the live input line. Refused until Ready.
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut InputLine)) -> bool {
        if !self.accepts_input() {
            return false;
        }
        edit(&mut self.input);
        true
    }

    /// Revoke pending boot steps. Nothing is emitted and no input is
    /// accepted afterwards. Returns the number of revoked steps.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;
        let revoked = self.boot.cancel();
        tracing::info!("Terminal session torn down ({} boot steps revoked)", revoked);
        revoked
    }

    pub fn accepts_input(&self) -> bool {
        self.boot.is_ready() && !self.torn_down
    }

    pub fn is_ready(&self) -> bool {
        self.boot.is_ready()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn boot_state(&self) -> BootState {
        self.boot.state()
    }

    pub fn boot(&self) -> &BootSequencer {
        &self.boot
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    pub fn clock(&self) -> &SharedTimeSource {
        &self.clock
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.boot.next_deadline()
    }

    /// How long the event loop may wait before the next boot step is due.
    pub fn time_until_next_deadline(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
