//! Static content and the command vocabulary.

pub mod aliases;
pub mod registry;
pub mod screens;

pub use aliases::{normalize, AliasError, AliasTable, Builtin, Command, CommandTable, Resolution};
pub use registry::{ContentRegistry, ScreenKey};
