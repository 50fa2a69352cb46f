//! View layer
//!
//! Pure rendering of a session into a ratatui frame.

pub mod render;
pub mod theme;
