//! Log mood use case

use crate::domain::{MoodCatalog, MoodEntry};
use crate::error::Result;
use crate::infrastructure::{KeyValueStorage, MoodStore};
use chrono::NaiveDate;

/// Service backing the log form
pub struct LogMoodService<S: KeyValueStorage> {
    store: MoodStore<S>,
    catalog: MoodCatalog,
}

impl<S: KeyValueStorage> LogMoodService<S> {
    pub fn new(store: MoodStore<S>, catalog: MoodCatalog) -> Self {
        LogMoodService { store, catalog }
    }

    /// Resolve the picked mood against the catalog and record it for `today`.
    pub fn execute(&mut self, mood_input: &str, note: &str, today: NaiveDate) -> Result<MoodEntry> {
        let mood = self.catalog.resolve(mood_input)?;
        self.store.append(&mood, note, today)
    }

    pub fn into_store(self) -> MoodStore<S> {
        self.store
    }
}
