//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`TerminalSession`], the single owner of all terminal state
//! - command parsing and execution against the [`VirtualFs`]
//! - boot line pacing and the [`PendingTask`] timer slot
//!
//! Nothing here touches the DOM, so all of it runs under plain `cargo test`.

pub mod boot;
mod commands;
pub mod error;
mod filesystem;
mod history;
mod output;
pub mod parser;
pub mod scheduler;
mod session;

pub use boot::BootTicket;
pub use commands::SessionEffect;
pub use filesystem::VirtualFs;
pub use scheduler::{Cancel, PendingTask};
pub use session::{BootProgress, Key, KeyResponse, TerminalSession};
