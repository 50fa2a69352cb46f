//! Session rendering
//!
//! Draws a title bar and, below it, the output buffer followed by the
//! prompt row. When the rows overflow the screen the view follows the tail
//! unless the visitor has scrolled back.

use crate::app::TerminalSession;
use crate::view::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const TITLE: &str = "~/meta-landing";

/// Scroll position of the output view, in rows above the tail.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    scroll: usize,
    max_scroll: usize,
    seen_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = (self.scroll + rows).min(self.max_scroll);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn follow_tail(&mut self) {
        self.scroll = 0;
    }

    /// Any new output snaps back to the tail.
    fn sync(&mut self, generation: u64, max_scroll: usize) {
        if generation != self.seen_generation {
            self.seen_generation = generation;
            self.scroll = 0;
        }
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }
}

/// Draw the whole session into `frame`.
pub fn render_session(
    frame: &mut Frame,
    session: &TerminalSession,
    theme: &Theme,
    view: &mut ViewState,
) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base_style()), area);

    let [title_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    render_title_bar(frame, title_area, session, theme);
    render_body(frame, body_area, session, theme, view);
}

fn render_title_bar(frame: &mut Frame, area: Rect, session: &TerminalSession, theme: &Theme) {
    let state = session.boot_state().label();
    let used = TITLE.width() + state.width() + 2;
    let gap = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(TITLE),
        Span::raw(" ".repeat(gap)),
        Span::raw(state),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme.title_style()), area);
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    session: &TerminalSession,
    theme: &Theme,
    view: &mut ViewState,
) {
    let mut rows: Vec<Line> = session
        .output()
        .lines()
        .iter()
        .map(|line| Line::from(Span::styled(line.text.as_str(), theme.style_for(line.kind))))
        .collect();

    let show_prompt = session.accepts_input();
    if show_prompt {
        rows.push(Line::from(vec![
            Span::styled(session.prompt(), theme.prompt_style()),
            Span::styled(session.input().text(), theme.base_style()),
        ]));
    } else if !session.is_torn_down() {
        rows.push(Line::from(Span::styled(
            "_",
            Style::default().fg(theme.booting_fg),
        )));
    }

    let height = area.height as usize;
    let overflow = rows.len().saturating_sub(height);
    view.sync(session.output().generation(), overflow);

    let start = overflow - view.scroll();
    let visible: Vec<Line> = rows.into_iter().skip(start).take(height).collect();
    let prompt_row = visible.len().saturating_sub(1);
    frame.render_widget(Paragraph::new(visible), area);

    if show_prompt && view.scroll() == 0 {
        let col = session.prompt().width() + session.input().before_cursor().width();
        let x = area.x + clamp_column(col, area.width);
        let y = area.y + prompt_row as u16;
        frame.set_cursor_position((x, y));
    }
}

/// Screen column for a display offset, pinned to the last cell of `width`.
fn clamp_column(col: usize, width: u16) -> u16 {
    u16::try_from(col)
        .unwrap_or(u16::MAX)
        .min(width.saturating_sub(1))
}
