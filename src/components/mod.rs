//! UI components built with Leptos.
//!
//! - [`Shell`] - Main shell interface (screen chrome and terminal)
//! - [`lang`] - Display language toggle
//! - [`theme`] - Color theme toggle
//! - [`terminal`] - Terminal emulator interface

pub mod lang;
pub mod terminal;
pub mod theme;

pub use terminal::Shell;
