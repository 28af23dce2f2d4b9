//! Interactive TUI interface
//!
//! Playable terminal board with keyboard status and persisted stats.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
