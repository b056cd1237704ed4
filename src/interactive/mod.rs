//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{ADVISORY_TIMEOUT, App, Message, MessageStyle, run_tui};
