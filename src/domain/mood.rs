//! Mood catalog and alias resolution
//!
//! The store treats a mood as an opaque string. The catalog is only consulted
//! by the log form to decide what the user may pick.

use crate::error::{MoodlogError, Result};

/// Default selectable moods, in display order.
pub const DEFAULT_MOODS: [&str; 5] = ["😊", "😐", "😢", "😠", "😴"];

/// Word aliases for the default moods.
const ALIASES: [(&str, &str); 5] = [
    ("happy", "😊"),
    ("neutral", "😐"),
    ("sad", "😢"),
    ("angry", "😠"),
    ("tired", "😴"),
];

/// The configured set of moods a user can log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCatalog {
    moods: Vec<String>,
}

impl Default for MoodCatalog {
    fn default() -> Self {
        MoodCatalog::new(DEFAULT_MOODS.iter().map(|m| m.to_string()).collect())
    }
}

impl MoodCatalog {
    /// Create a catalog, dropping blank and repeated moods.
    pub fn new(moods: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(moods.len());
        for mood in moods {
            let mood = mood.trim().to_string();
            if !mood.is_empty() && !unique.contains(&mood) {
                unique.push(mood);
            }
        }
        MoodCatalog { moods: unique }
    }

    pub fn moods(&self) -> &[String] {
        &self.moods
    }

    /// Alias for a mood, if it has one
    pub fn alias_for(mood: &str) -> Option<&'static str> {
        ALIASES
            .iter()
            .find(|(_, emoji)| *emoji == mood)
            .map(|(alias, _)| *alias)
    }

    /// Resolve user input (a catalog mood or an alias) to a catalog mood.
    pub fn resolve(&self, input: &str) -> Result<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoodlogError::InvalidMood(input.to_string()));
        }

        if let Some(mood) = self.moods.iter().find(|m| m.as_str() == trimmed) {
            return Ok(mood.clone());
        }

        let lowered = trimmed.to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, emoji)| *emoji)
            .filter(|emoji| self.moods.iter().any(|m| m == emoji))
            .map(str::to_string)
            .ok_or_else(|| MoodlogError::InvalidMood(input.to_string()))
    }
}
