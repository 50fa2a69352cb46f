//! The output buffer: the ordered lines the view layer displays verbatim.
//!
//! Lines are never edited once emitted. The buffer only grows through
//! [`OutputBuffer::append`] or is swapped wholesale through
//! [`OutputBuffer::replace`] (full-screen navigation and `clear`).

use serde::{Deserialize, Serialize};

/// Rendering hint attached to every output line.
///
/// Nothing in the core branches on the kind; it exists so the view can
/// style a line without parsing its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    /// Echo of a command the visitor typed
    InputEcho,
    /// Boot chatter and other machine voice
    System,
    /// Section headings
    Header,
    Error,
    Success,
    Emphasis,
    Plain,
}

/// A single rendered line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Plain)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::System)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error)
    }

    /// Echo of a submitted command, prefixed with the prompt.
    pub fn input_echo(prompt: &str, raw: &str) -> Self {
        Self::new(format!("{prompt}{raw}"), LineKind::InputEcho)
    }
}

/// Ordered, append-or-replace sequence of output lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    lines: Vec<OutputLine>,
    /// Bumped on every mutation so observers can tell a replace with
    /// identical content apart from no change at all.
    generation: u64,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append lines after the existing ones.
    pub fn append<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = OutputLine>,
    {
        self.lines.extend(lines);
        self.generation += 1;
    }

    /// Discard every line and start over with `lines`.
    pub fn replace<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = OutputLine>,
    {
        self.lines.clear();
        self.lines.extend(lines);
        self.generation += 1;
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Plain text of the whole buffer, one line per row.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}
