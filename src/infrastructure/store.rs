//! Mood entry store
//!
//! Owns a single storage key holding the whole entry collection as a JSON
//! array. Every write replaces the full collection.
//!
//! Read paths degrade to an empty collection when the key cannot be read or
//! holds malformed data. `append` never degrades: if the current collection
//! cannot be loaded, or the new one cannot be persisted, it fails.

use crate::domain::{format_date, MoodCounts, MoodEntry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::KeyValueStorage;
use chrono::NaiveDate;
use log::{debug, info, warn};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "moodEntries";

/// Append-only store of mood entries, one per date
#[derive(Debug)]
pub struct MoodStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> MoodStore<S> {
    /// Create a store over `storage`, owning `key`
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        MoodStore {
            storage,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Record a mood for `today`.
    ///
    /// Fails with `DuplicateDate` if `today` already has an entry; the stored
    /// collection is left untouched in that case.
    pub fn append(&mut self, mood: &str, note: &str, today: NaiveDate) -> Result<MoodEntry> {
        if mood.trim().is_empty() {
            return Err(MoodlogError::InvalidMood(mood.to_string()));
        }

        let mut entries = self.load()?;

        if entries.iter().any(|e| e.date == today) {
            info!(
                "event=mood_append status=duplicate date={}",
                format_date(today)
            );
            return Err(MoodlogError::DuplicateDate(format_date(today)));
        }

        let entry = MoodEntry::new(today, mood, note);
        entries.push(entry.clone());

        let encoded = encode(&entries)?;
        self.storage.set(&self.key, &encoded)?;

        info!(
            "event=mood_append status=ok date={} total={}",
            format_date(today),
            entries.len()
        );
        Ok(entry)
    }

    /// Every entry in storage order (oldest first)
    pub fn list_all(&self) -> Vec<MoodEntry> {
        self.load_or_empty()
    }

    /// Every entry, most recent date first
    pub fn list_by_date_descending(&self) -> Vec<MoodEntry> {
        let mut entries = self.load_or_empty();
        // Same order as comparing the YYYY-MM-DD strings.
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Every entry in reverse storage order
    pub fn list_by_date_ascending_reversed(&self) -> Vec<MoodEntry> {
        let mut entries = self.load_or_empty();
        entries.reverse();
        entries
    }

    /// The `limit` most recently stored entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<MoodEntry> {
        let mut entries = self.list_by_date_ascending_reversed();
        entries.truncate(limit);
        entries
    }

    pub fn has_entry_for_date(&self, date: NaiveDate) -> bool {
        self.load_or_empty().iter().any(|e| e.date == date)
    }

    /// Number of entries per mood
    pub fn aggregate_by_mood(&self) -> MoodCounts {
        MoodCounts::from_entries(&self.load_or_empty())
    }

    /// Load the collection, surfacing storage and decoding failures.
    fn load(&self) -> Result<Vec<MoodEntry>> {
        match self.storage.get(&self.key)? {
            Some(raw) => decode(&raw),
            None => {
                debug!("event=mood_load status=empty key={}", self.key);
                Ok(Vec::new())
            }
        }
    }

    fn load_or_empty(&self) -> Vec<MoodEntry> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "event=mood_load status=degraded key={} error={}",
                    self.key, e
                );
                Vec::new()
            }
        }
    }
}

/// Encode a collection as a JSON array of `{date, mood, note}` objects.
pub fn encode(entries: &[MoodEntry]) -> Result<String> {
    serde_json::to_string(entries)
        .map_err(|e| MoodlogError::CorruptData(format!("Failed to encode entries: {}", e)))
}

/// Decode a collection written by [`encode`].
pub fn decode(raw: &str) -> Result<Vec<MoodEntry>> {
    serde_json::from_str(raw)
        .map_err(|e| MoodlogError::CorruptData(format!("Failed to parse mood entries: {}", e)))
}
