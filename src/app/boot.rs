//! Boot sequence: timed system chatter played once before input opens.
//!
//! Line `i` is scheduled at the sum of the delays of lines `0..i`. Once the
//! last line's own delay has also elapsed the banner and usage hint are
//! appended, and after a further settle delay the sequencer reports Ready.
//! All of it is a set of entries in a [`TimerQueue`], so tearing the session
//! down revokes every emission that has not happened yet.

use crate::config::BootConfig;
use crate::content::registry::lines_of;
use crate::content::screens;
use crate::model::{LineKind, OutputBuffer, OutputLine};
use crate::services::timer_queue::TimerQueue;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootState {
    #[default]
    NotStarted,
    Booting,
    Ready,
}

impl BootState {
    pub fn label(self) -> &'static str {
        match self {
            BootState::NotStarted => "offline",
            BootState::Booting => "booting",
            BootState::Ready => "ready",
        }
    }
}

/// One line of boot chatter, with the pause that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootLine {
    pub text: String,
    pub delay_ms: u64,
    pub kind: LineKind,
}

impl BootLine {
    pub fn new(text: impl Into<String>, delay_ms: u64, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            delay_ms,
            kind,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// The shipped boot table with delays scaled by `settings`.
    pub fn builtin(settings: &BootConfig) -> Vec<BootLine> {
        screens::BOOT_LINES
            .iter()
            .map(|(kind, delay_ms, text)| BootLine::new(*text, settings.scale_ms(*delay_ms), *kind))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BootStep {
    Line(usize),
    Epilogue,
    Ready,
}

/// What one [`BootSequencer::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct BootProgress {
    /// Lines appended to the output buffer
    pub lines_emitted: usize,
    /// The sequence finished during this poll
    pub became_ready: bool,
}

impl BootProgress {
    pub fn changed(&self) -> bool {
        self.lines_emitted > 0 || self.became_ready
    }
}

#[derive(Debug)]
pub struct BootSequencer {
    lines: Vec<BootLine>,
    epilogue: Vec<OutputLine>,
    settle_delay: Duration,
    state: BootState,
    timers: TimerQueue<BootStep>,
    cancelled: bool,
}

impl BootSequencer {
    pub fn new(lines: Vec<BootLine>, epilogue: Vec<OutputLine>, settle_delay: Duration) -> Self {
        Self {
            lines,
            epilogue,
            settle_delay,
            state: BootState::NotStarted,
            timers: TimerQueue::new(),
            cancelled: false,
        }
    }

    /// The shipped sequence: boot table, then banner and usage hint.
    pub fn builtin(settings: &BootConfig) -> Self {
        let mut epilogue = lines_of(screens::BANNER);
        epilogue.extend(lines_of(screens::USAGE_HINT));
        Self::new(
            BootLine::builtin(settings),
            epilogue,
            Duration::from_millis(settings.scale_ms(settings.settle_delay_ms)),
        )
    }

    /// Schedule the whole sequence from `now`. Runs once per sequencer;
    /// later calls are refused and return false.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != BootState::NotStarted || self.cancelled {
            tracing::warn!("Boot sequence already started, ignoring restart");
            return false;
        }

        let mut offset = Duration::ZERO;
        for (index, line) in self.lines.iter().enumerate() {
            self.timers
                .schedule_after(now, offset, BootStep::Line(index));
            offset += line.delay();
        }
        self.timers.schedule_after(now, offset, BootStep::Epilogue);
        self.timers
            .schedule_after(now, offset + self.settle_delay, BootStep::Ready);

        self.state = BootState::Booting;
        tracing::debug!(
            "Boot started: {} lines over {:?}, settle {:?}",
            self.lines.len(),
            offset,
            self.settle_delay
        );
        true
    }

    /// Fire every step that has come due, appending its lines to `output`.
    pub fn poll(&mut self, now: Instant, output: &mut OutputBuffer) -> BootProgress {
        let mut progress = BootProgress::default();
        if self.state != BootState::Booting {
            return progress;
        }

        for step in self.timers.pop_due(now) {
            match step {
                BootStep::Line(index) => {
                    if let Some(line) = self.lines.get(index) {
                        tracing::trace!("Boot line {}: {}", index, line.text);
                        output.append([OutputLine::new(line.text.clone(), line.kind)]);
                        progress.lines_emitted += 1;
                    }
                }
                BootStep::Epilogue => {
                    output.append(self.epilogue.iter().cloned());
                    progress.lines_emitted += self.epilogue.len();
                }
                BootStep::Ready => {
                    self.state = BootState::Ready;
                    progress.became_ready = true;
                    tracing::info!("Boot complete, {} lines on screen", output.len());
                }
            }
        }
        progress
    }

    /// Revoke every step that has not fired. Returns how many were revoked.
    /// After this the sequencer never emits again.
    pub fn cancel(&mut self) -> usize {
        self.cancelled = true;
        let revoked = self.timers.cancel_all();
        if revoked > 0 {
            tracing::debug!("Boot cancelled, {} pending steps revoked", revoked);
        }
        revoked
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == BootState::Ready
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn lines(&self) -> &[BootLine] {
        &self.lines
    }

    pub fn epilogue_len(&self) -> usize {
        self.epilogue.len()
    }

    /// Sum of every line delay: when the epilogue is appended.
    pub fn total_delay(&self) -> Duration {
        self.lines.iter().map(BootLine::delay).sum()
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }
}
