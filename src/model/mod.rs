//! Plain data held by the terminal session.

pub mod history;
pub mod input_line;
pub mod output;

pub use history::CommandHistory;
pub use input_line::InputLine;
pub use output::{LineKind, OutputBuffer, OutputLine};
