use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use meta_landing::app::{BootProgress, TerminalSession};
use meta_landing::config::{BootConfig, Config};
use meta_landing::input::key_handler::{self, KeyResult};
use meta_landing::services::time_source::TestTimeSource;
use meta_landing::view::render::{render_session, ViewState};
use meta_landing::view::theme::Theme;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Position, Terminal};
use std::sync::Arc;
use std::time::Duration;

/// Drives a [`TerminalSession`] through the same key handling and rendering
/// as the binary, on a virtual clock and a [`TestBackend`].
pub struct TerminalTestHarness {
    session: TerminalSession,
    view: ViewState,
    theme: Theme,
    clock: Arc<TestTimeSource>,
    terminal: Terminal<TestBackend>,
}

impl TerminalTestHarness {
    /// Default configuration; the boot sequence has started but no time
    /// has passed.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> Result<Self> {
        let clock = TestTimeSource::shared();
        let mut session = TerminalSession::new(&config, clock.clone());
        session.start_boot();
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            session,
            view: ViewState::new(),
            theme: Theme::from_name(&config.theme),
            clock,
            terminal,
        })
    }

    /// Zero boot delays; ready to type immediately.
    pub fn booted(width: u16, height: u16) -> Result<Self> {
        let config = Config {
            boot: BootConfig::instant(),
            ..Config::default()
        };
        let harness = Self::with_config(width, height, config)?;
        assert!(harness.session.is_ready(), "instant boot should be ready");
        Ok(harness)
    }

    /// Move the virtual clock forward and fire due boot steps.
    pub fn advance(&mut self, duration: Duration) -> BootProgress {
        self.clock.advance(duration);
        self.session.tick()
    }

    /// Advance until the session is ready, in steps of the next deadline.
    pub fn finish_boot(&mut self) {
        while !self.session.is_ready() {
            let Some(wait) = self.session.time_until_next_deadline() else {
                panic!("boot stalled before Ready");
            };
            let _ = self.advance(wait);
        }
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<KeyResult> {
        let result =
            key_handler::handle_key(&mut self.session, &mut self.view, KeyEvent::new(code, modifiers));
        self.render()?;
        Ok(result)
    }

    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(())
    }

    pub fn submit(&mut self) -> Result<KeyResult> {
        self.send_key(KeyCode::Enter, KeyModifiers::NONE)
    }

    /// Type `command` and press Enter.
    pub fn run_command(&mut self, command: &str) -> Result<KeyResult> {
        self.type_text(command)?;
        self.submit()
    }

    pub fn paste(&mut self, text: &str) -> Result<KeyResult> {
        let result = key_handler::handle_paste(&mut self.session, text);
        self.render()?;
        Ok(result)
    }

    pub fn render(&mut self) -> Result<()> {
        let session = &self.session;
        let theme = &self.theme;
        let view = &mut self.view;
        self.terminal
            .draw(|frame| render_session(frame, session, theme, view))?;
        Ok(())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Screen contents, one line per row, trailing spaces trimmed.
    pub fn screen_to_string(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| self.row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn screen_row(&self, y: u16) -> String {
        self.row_text(self.buffer(), y)
    }

    fn row_text(&self, buffer: &Buffer, y: u16) -> String {
        let mut row = String::new();
        for x in 0..buffer.area.width {
            row.push_str(buffer[(x, y)].symbol());
        }
        row.trim_end().to_string()
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {text:?}\nScreen:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {text:?}\nScreen:\n{screen}"
        );
    }

    pub fn cursor_position(&mut self) -> Result<Position> {
        Ok(self.terminal.get_cursor_position()?)
    }

    pub fn teardown(&mut self) -> usize {
        self.session.teardown()
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TerminalSession {
        &mut self.session
    }

    pub fn clock(&self) -> &TestTimeSource {
        &self.clock
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}
