//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileEntry`] - Virtual filesystem representation
//! - [`OutputLine`], [`Fragment`] - Terminal output types
//! - [`InputMode`] - Whether the prompt accepts keystrokes

mod filesystem;
mod terminal;

pub use filesystem::FileEntry;
pub use terminal::{Fragment, FragmentStyle, InputMode, OutputLine, OutputLineData};
