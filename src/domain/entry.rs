//! Mood entry record

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One dated mood observation.
///
/// Serialized as `{"date": "YYYY-MM-DD", "mood": "...", "note": "..."}`.
/// Records written without a `note` field, or with `"note": null`, load with
/// an empty note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: String,
    #[serde(default, deserialize_with = "note_or_empty")]
    pub note: String,
}

fn note_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl MoodEntry {
    /// Build an entry, trimming the note.
    pub fn new(date: NaiveDate, mood: impl Into<String>, note: &str) -> Self {
        MoodEntry {
            date,
            mood: mood.into(),
            note: note.trim().to_string(),
        }
    }

    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}
