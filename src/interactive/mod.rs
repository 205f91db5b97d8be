//! Interactive terminal UI

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, QueryMode, run_tui};
