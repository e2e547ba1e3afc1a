//! Terminal front end: command parsing and text rendering.

mod command;
pub mod render;

pub use command::Command;

/// The one message shown for any failure.
pub const ALERT: &str = "Erro! Sem internet?";
