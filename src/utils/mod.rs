//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window, document and localStorage access
//! - [`logger`] - `log` backend writing to the browser console

pub mod dom;
pub mod logger;
