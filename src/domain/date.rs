//! Calendar date parsing in the `YYYY-MM-DD` key format

use crate::error::{MoodlogError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Storage and display format of an entry date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded fields such as `2024-1-5`, which would not
/// sort correctly as a string, so the shape is checked first.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if !date_regex().is_match(trimmed) {
        return Err(MoodlogError::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| MoodlogError::InvalidDate(input.to_string()))
}

/// Format a date as its `YYYY-MM-DD` key.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
