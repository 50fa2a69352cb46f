//! Scripted, non-interactive driving of a session.
//!
//! Each input line is dispatched and the whole output buffer is written out
//! after it, either as plain text or as a JSON array of lines. The screen
//! after boot is written first.

use crate::app::TerminalSession;
use crate::model::OutputBuffer;
use std::io::{self, BufRead, Write};

/// Written between plain-text snapshots
pub const SNAPSHOT_SEPARATOR: &str = "----";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Text,
    /// One JSON array of `{ "text", "kind" }` per snapshot, one per line
    Json,
}

/// Boot the session, then dispatch every line of `input`.
///
/// The session is expected to use zero boot delays: every step is due at
/// start and one tick brings it to Ready.
pub fn run<R, W>(
    session: &mut TerminalSession,
    input: R,
    out: &mut W,
    format: SnapshotFormat,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    session.start_boot();
    let _ = session.tick();
    if !session.is_ready() {
        tracing::warn!("Headless session did not reach Ready after boot");
    }
    write_snapshot(session.output(), out, format)?;

    let result = dispatch_lines(session, input, out, format);
    session.teardown();
    out.flush()?;
    result
}

/// Undecodable bytes become U+FFFD; a bad line is still dispatched.
fn dispatch_lines<R, W>(
    session: &mut TerminalSession,
    mut input: R,
    out: &mut W,
    format: SnapshotFormat,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut dispatched = 0;
    let mut raw = Vec::new();
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim_end_matches(['\n', '\r']);
        let outcome = session.dispatch(line);
        tracing::debug!("headless: {:?} -> {:?}", line, outcome);
        write_snapshot(session.output(), out, format)?;
        dispatched += 1;
    }
    Ok(dispatched)
}

pub fn write_snapshot<W: Write>(
    buffer: &OutputBuffer,
    out: &mut W,
    format: SnapshotFormat,
) -> io::Result<()> {
    match format {
        SnapshotFormat::Text => {
            out.write_all(buffer.to_plain_text().as_bytes())?;
            writeln!(out, "{SNAPSHOT_SEPARATOR}")
        }
        SnapshotFormat::Json => {
            serde_json::to_writer(&mut *out, buffer.lines())?;
            writeln!(out)
        }
    }
}
