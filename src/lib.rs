//! moodlog - Personal mood journal
//!
//! Records at most one mood per calendar day, with an optional note, and
//! reports history and per-mood counts from an append-only store.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::MoodlogError;
