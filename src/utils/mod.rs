//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`post_json`] - JSON requests with timeout
//! - [`format`] - Display formatting for results

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::{fetch_json, post_json};
