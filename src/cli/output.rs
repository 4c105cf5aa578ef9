//! Output formatting utilities

use crate::application::Dashboard;
use crate::domain::{format_date, MoodCatalog, MoodCounts, MoodEntry};

const NO_ENTRIES: &str = "No moods logged yet.";

/// Format entries one per line: mood, date, then the note if any
pub fn format_entry_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return NO_ENTRIES.to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{}  {}", entry.mood, format_date(entry.date)));
        if entry.has_note() {
            output.push_str(&format!("  Note: {}", entry.note));
        }
        output.push('\n');
    }
    output
}

/// Format the dashboard view
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    if dashboard.today_logged {
        output.push_str("Today's mood added\n");
    } else {
        output.push_str(&format!(
            "Today's mood not logged yet ({}). Run 'moodlog log <mood>'\n",
            format_date(dashboard.today)
        ));
    }

    output.push_str("\nRecent Entries\n");
    output.push_str(&format_entry_list(&dashboard.recent));
    output
}

/// Format per-mood counts, most frequent first
pub fn format_stats(counts: &MoodCounts) -> String {
    if counts.is_empty() {
        return "No mood data yet.".to_string();
    }

    let mut output = String::new();
    for (mood, count) in counts.sorted() {
        let plural = if count > 1 { "s" } else { "" };
        output.push_str(&format!("{}  {} time{}\n", mood, count, plural));
    }
    output.push_str(&format!("Total: {}\n", counts.total()));
    output
}

/// Format the selectable moods with their aliases
pub fn format_mood_catalog(catalog: &MoodCatalog) -> String {
    let mut output = String::new();
    for mood in catalog.moods() {
        match MoodCatalog::alias_for(mood) {
            Some(alias) => output.push_str(&format!("{}  {}\n", mood, alias)),
            None => output.push_str(&format!("{}\n", mood)),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No moods logged yet.");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            MoodEntry::new(day(17), "😊", "good walk"),
            MoodEntry::new(day(16), "😢", ""),
        ];

        let output = format_entry_list(&entries);
        assert_eq!(output, "😊  2025-01-17  Note: good walk\n😢  2025-01-16\n");
    }

    #[test]
    fn test_format_dashboard_not_logged() {
        let dashboard = Dashboard {
            today: day(18),
            today_logged: false,
            recent: vec![MoodEntry::new(day(17), "😐", "")],
        };
        let output = format_dashboard(&dashboard);
        assert!(output.contains("not logged yet (2025-01-18)"));
        assert!(output.contains("😐  2025-01-17"));
    }

    #[test]
    fn test_format_dashboard_logged_and_empty() {
        let dashboard = Dashboard {
            today: day(18),
            today_logged: true,
            recent: vec![],
        };
        let output = format_dashboard(&dashboard);
        assert!(output.contains("Today's mood added"));
        assert!(output.contains("No moods logged yet."));
    }

    #[test]
    fn test_format_stats_pluralizes() {
        let entries = vec![
            MoodEntry::new(day(1), "😊", ""),
            MoodEntry::new(day(2), "😊", ""),
            MoodEntry::new(day(3), "😢", ""),
        ];
        let output = format_stats(&MoodCounts::from_entries(&entries));
        assert_eq!(output, "😊  2 times\n😢  1 time\nTotal: 3\n");
    }

    #[test]
    fn test_format_empty_stats() {
        assert_eq!(format_stats(&MoodCounts::default()), "No mood data yet.");
    }

    #[test]
    fn test_format_mood_catalog() {
        let catalog = MoodCatalog::new(vec!["😊".to_string(), "🤔".to_string()]);
        assert_eq!(format_mood_catalog(&catalog), "😊  happy\n🤔\n");
    }
}
