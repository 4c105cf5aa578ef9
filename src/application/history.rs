//! History use case

use crate::domain::MoodEntry;
use crate::infrastructure::{KeyValueStorage, MoodStore};

/// Full history, most recent date first, optionally truncated.
pub fn list_history<S: KeyValueStorage>(
    store: &MoodStore<S>,
    limit: Option<usize>,
) -> Vec<MoodEntry> {
    let mut entries = store.list_by_date_descending();
    if let Some(n) = limit {
        entries.truncate(n);
    }
    entries
}
