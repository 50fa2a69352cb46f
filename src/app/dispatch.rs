//! Command dispatch: one submitted line in, one buffer mutation out.

use super::TerminalSession;
use crate::content::screens;
use crate::content::registry::lines_of;
use crate::content::{normalize, Builtin, Command, Resolution, ScreenKey};
use crate::model::OutputLine;
use crate::services::time_source::TimeSource;
use chrono::{DateTime, Utc};

/// What a dispatch did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Input is not open yet, or the session was torn down
    Ignored,
    /// Whitespace-only input; nothing changed
    Empty,
    Screen(ScreenKey),
    Cleared,
    Builtin(Builtin),
    Exit,
    /// No alias matched the normalized input
    Unknown(String),
}

impl DispatchOutcome {
    /// True when the output buffer was modified.
    pub fn changed_output(&self) -> bool {
        !matches!(self, DispatchOutcome::Ignored | DispatchOutcome::Empty)
    }
}

/// `date`-style rendering of a wall-clock instant.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%a %b %e %H:%M:%S UTC %Y").to_string()
}

/// Answer line for an inline built-in.
pub fn builtin_response(builtin: Builtin, clock: &dyn TimeSource) -> String {
    match builtin {
        Builtin::Ls => screens::LS_LISTING.to_string(),
        Builtin::Whoami => screens::WHOAMI.to_string(),
        Builtin::Pwd => screens::PWD.to_string(),
        Builtin::Uname => screens::UNAME.to_string(),
        Builtin::Date => format_date(clock.wall_clock()),
    }
}

pub fn unknown_command_message(raw: &str) -> String {
    format!("Command not found: {raw}. Type 'help' for available commands.")
}

impl TerminalSession {
    /// Run one submitted line.
    ///
    /// Whitespace-only input is a no-op. Anything else is recorded in the
    /// history and then either replaces the buffer (screens, `clear`,
    /// `exit`) or appends an echo plus one answer line (built-ins and
    /// unknown commands).
    pub fn dispatch(&mut self, raw: &str) -> DispatchOutcome {
        if !self.accepts_input() {
            tracing::debug!("Dispatch ignored, session not ready: {:?}", raw);
            return DispatchOutcome::Ignored;
        }

        let resolution = self.commands.resolve(raw);
        if resolution == Resolution::Empty {
            return DispatchOutcome::Empty;
        }
        self.history.push(normalize(raw));

        let shown = raw.trim();
        let outcome = match resolution {
            Resolution::Empty => DispatchOutcome::Empty,
            Resolution::Command(Command::Screen(key)) => {
                let lines = self.commands.registry().get(key).unwrap_or_default();
                self.output.replace(lines.iter().cloned());
                DispatchOutcome::Screen(key)
            }
            Resolution::Command(Command::Clear) => {
                self.output.replace(std::iter::empty());
                DispatchOutcome::Cleared
            }
            Resolution::Command(Command::Exit) => {
                self.output.replace(lines_of(screens::FAREWELL));
                DispatchOutcome::Exit
            }
            Resolution::Command(Command::Builtin(builtin)) => {
                let answer = builtin_response(builtin, self.clock.as_ref());
                self.output.append([
                    OutputLine::input_echo(&self.prompt, shown),
                    OutputLine::plain(answer),
                ]);
                DispatchOutcome::Builtin(builtin)
            }
            Resolution::Unknown(normalized) => {
                tracing::debug!("Unknown command: {}", normalized);
                self.output.append([
                    OutputLine::input_echo(&self.prompt, shown),
                    OutputLine::error(unknown_command_message(shown)),
                ]);
                DispatchOutcome::Unknown(normalized)
            }
        };

        tracing::debug!("Dispatched {:?} -> {:?}", shown, outcome);
        outcome
    }
}
