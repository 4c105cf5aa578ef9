//! Per-mood aggregation

use crate::domain::MoodEntry;
use std::collections::HashMap;

/// Count of entries per distinct mood.
///
/// Key order of the underlying map is unspecified; use [`MoodCounts::sorted`]
/// for a stable display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodCounts {
    counts: HashMap<String, usize>,
}

impl MoodCounts {
    /// Count moods in a single pass over the entries.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a MoodEntry>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in entries {
            *counts.entry(entry.mood.clone()).or_insert(0) += 1;
        }
        MoodCounts { counts }
    }

    pub fn get(&self, mood: &str) -> usize {
        self.counts.get(mood).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct moods
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Total number of entries counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn as_map(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Counts ordered by count descending, then mood ascending.
    pub fn sorted(&self) -> Vec<(String, usize)> {
        let mut pairs: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(mood, count)| (mood.clone(), *count))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(day: u32, mood: &str) -> MoodEntry {
        MoodEntry::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), mood, "")
    }

    #[test]
    fn test_counts_per_mood() {
        let entries = vec![entry(1, "😊"), entry(2, "😊"), entry(3, "😢")];
        let counts = MoodCounts::from_entries(&entries);

        let expected: HashMap<String, usize> =
            [("😊".to_string(), 2), ("😢".to_string(), 1)].into_iter().collect();
        assert_eq!(counts.as_map(), &expected);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_empty_entries_give_empty_counts() {
        let entries: Vec<MoodEntry> = Vec::new();
        let counts = MoodCounts::from_entries(&entries);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get("😊"), 0);
    }

    #[test]
    fn test_sorted_by_count_then_mood() {
        let entries = vec![
            entry(1, "b"),
            entry(2, "a"),
            entry(3, "c"),
            entry(4, "c"),
        ];
        let sorted = MoodCounts::from_entries(&entries).sorted();
        assert_eq!(
            sorted,
            vec![
                ("c".to_string(), 2),
                ("a".to_string(), 1),
                ("b".to_string(), 1)
            ]
        );
    }
}
