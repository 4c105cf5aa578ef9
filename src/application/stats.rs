//! Stats use case

use crate::domain::MoodCounts;
use crate::infrastructure::{KeyValueStorage, MoodStore};

/// Per-mood counts over the whole collection.
pub fn mood_stats<S: KeyValueStorage>(store: &MoodStore<S>) -> MoodCounts {
    store.aggregate_by_mood()
}
