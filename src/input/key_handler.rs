//! Key handling
//!
//! Maps crossterm key and paste events onto session operations. Quitting
//! works at any time. Everything else is dropped until the boot sequence
//! has finished.

use crate::app::{DispatchOutcome, TerminalSession};
use crate::view::render::ViewState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PageUp/PageDown
pub const PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
    /// The key changed something and the screen needs a redraw
    Consumed,
    /// Nothing happened
    Ignored,
    /// A line was submitted
    Submitted(DispatchOutcome),
    /// The visitor asked to leave
    Quit,
}

impl KeyResult {
    pub fn needs_render(&self) -> bool {
        !matches!(self, KeyResult::Ignored)
    }
}

pub fn handle_key(session: &mut TerminalSession, view: &mut ViewState, key: KeyEvent) -> KeyResult {
    // Only key presses, not repeats or releases
    if key.kind != KeyEventKind::Press {
        return KeyResult::Ignored;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d')) {
        return KeyResult::Quit;
    }

    if !session.accepts_input() {
        return KeyResult::Ignored;
    }

    let changed = match key.code {
        KeyCode::Enter => {
            view.follow_tail();
            return KeyResult::Submitted(session.submit());
        }
        KeyCode::Up => session.recall_older(),
        KeyCode::Down => session.recall_newer(),
        KeyCode::PageUp => {
            view.scroll_up(PAGE_ROWS);
            true
        }
        KeyCode::PageDown => {
            view.scroll_down(PAGE_ROWS);
            true
        }
        KeyCode::Backspace => session.edit_input(|line| line.backspace()),
        KeyCode::Delete => session.edit_input(|line| line.delete()),
        KeyCode::Left => session.edit_input(|line| line.cursor_left()),
        KeyCode::Right => session.edit_input(|line| line.cursor_right()),
        KeyCode::Home => session.edit_input(|line| line.move_to_start()),
        KeyCode::End => session.edit_input(|line| line.move_to_end()),
        KeyCode::Char('a') if ctrl => session.edit_input(|line| line.move_to_start()),
        KeyCode::Char('e') if ctrl => session.edit_input(|line| line.move_to_end()),
        KeyCode::Char('u') if ctrl => session.edit_input(|line| line.clear()),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            session.edit_input(|line| line.insert_char(c))
        }
        _ => false,
    };

    if changed {
        KeyResult::Consumed
    } else {
        KeyResult::Ignored
    }
}

/// Bracketed paste: insert the text with line breaks removed.
pub fn handle_paste(session: &mut TerminalSession, text: &str) -> KeyResult {
    let flat: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    if flat.is_empty() {
        return KeyResult::Ignored;
    }
    if session.edit_input(|line| line.insert_str(&flat)) {
        KeyResult::Consumed
    } else {
        KeyResult::Ignored
    }
}
