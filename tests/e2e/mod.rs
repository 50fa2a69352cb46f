pub mod boot;
pub mod builtins;
pub mod history;
pub mod navigation;
pub mod teardown;
