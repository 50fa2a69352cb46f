//! Keyboard and paste input

pub mod key_handler;
