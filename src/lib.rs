// Landing terminal library - the core state machine and its runtime front end

pub mod app;
pub mod config;
pub mod content;
pub mod headless;
pub mod model;
pub mod services;

#[cfg(feature = "runtime")]
pub mod input;
#[cfg(feature = "runtime")]
pub mod view;
