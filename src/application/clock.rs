//! Caller-side clock for stamping entries

use crate::domain::parse_date;
use crate::error::Result;
use chrono::{Local, NaiveDate};

/// Environment variable that pins "today" to a fixed `YYYY-MM-DD` date
pub const TODAY_ENV: &str = "MOODLOG_TODAY";

/// The current local calendar date, unless pinned by `MOODLOG_TODAY`.
pub fn today() -> Result<NaiveDate> {
    resolve_today(std::env::var(TODAY_ENV).ok().as_deref())
}

fn resolve_today(pinned: Option<&str>) -> Result<NaiveDate> {
    match pinned.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => parse_date(value),
        None => Ok(Local::now().date_naive()),
    }
}
