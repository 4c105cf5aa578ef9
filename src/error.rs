//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Mood already logged for {0}")]
    DuplicateDate(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Corrupt mood data: {0}")]
    CorruptData(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidMood(_) | MoodlogError::InvalidDate(_) => 3,
            MoodlogError::DuplicateDate(_) => 4,
            MoodlogError::StorageUnavailable(_) | MoodlogError::CorruptData(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new mood journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::DuplicateDate(date) => {
                format!(
                    "Mood already logged for today ({})\n\n\
                    Past entries cannot be edited. Use 'moodlog history' to review them.",
                    date
                )
            }
            MoodlogError::InvalidMood(mood) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Suggestions:\n\
                    • Use one of the configured moods (see 'moodlog moods')\n\
                    • Aliases are accepted: happy, neutral, sad, angry, tired\n\n\
                    Examples:\n\
                    moodlog log happy\n\
                    moodlog log 😊 --note \"good walk\"",
                    mood
                )
            }
            MoodlogError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD (e.g., 2025-01-17)",
                    date
                )
            }
            MoodlogError::StorageUnavailable(msg) | MoodlogError::CorruptData(msg) => {
                format!(
                    "{}\n\n\
                    Your mood was NOT saved.\n\
                    Suggestions:\n\
                    • Check permissions on the .moodlog/data directory\n\
                    • Inspect .moodlog/data for a damaged file",
                    msg
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("recent_limit") {
                    format!(
                        "{}\n\n\
                        Expected a positive integer\n\
                        Example: moodlog config recent_limit 10",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
