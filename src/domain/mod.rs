//! Domain layer - Mood entries, dates, and categories

pub mod date;
pub mod entry;
pub mod mood;
pub mod stats;

pub use date::{format_date, parse_date};
pub use entry::MoodEntry;
pub use mood::MoodCatalog;
pub use stats::MoodCounts;
