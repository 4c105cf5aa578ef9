//! Dashboard use case

use crate::domain::MoodEntry;
use crate::infrastructure::{KeyValueStorage, MoodStore};
use chrono::NaiveDate;

/// What the dashboard shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub today_logged: bool,
    pub recent: Vec<MoodEntry>,
}

/// Service for building the dashboard view
pub struct DashboardService<'a, S: KeyValueStorage> {
    store: &'a MoodStore<S>,
}

impl<'a, S: KeyValueStorage> DashboardService<'a, S> {
    pub fn new(store: &'a MoodStore<S>) -> Self {
        DashboardService { store }
    }

    /// Re-read the store and build a fresh dashboard.
    pub fn execute(&self, today: NaiveDate, limit: usize) -> Dashboard {
        Dashboard {
            today,
            today_logged: self.store.has_entry_for_date(today),
            recent: self.store.recent(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemoryStorage, DEFAULT_STORAGE_KEY};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_empty_dashboard() {
        let store = MoodStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let dashboard = DashboardService::new(&store).execute(day(1), 7);
        assert!(!dashboard.today_logged);
        assert!(dashboard.recent.is_empty());
    }

    #[test]
    fn test_dashboard_reflects_latest_append() {
        let mut store = MoodStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        store.append("😐", "", day(1)).unwrap();

        let before = DashboardService::new(&store).execute(day(2), 7);
        assert!(!before.today_logged);

        store.append("😊", "", day(2)).unwrap();
        let after = DashboardService::new(&store).execute(day(2), 1);
        assert!(after.today_logged);
        assert_eq!(after.recent.len(), 1);
        assert_eq!(after.recent[0].date, day(2));
    }
}
