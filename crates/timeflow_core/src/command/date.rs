//! Relative date resolution.
//!
//! Recognized cues are `tomorrow`, `next week` and the seven weekday names,
//! matched as case-insensitive substrings.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Weekday names in Sunday-first scan order.
const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
];

/// Which rule decided the draft date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCue {
    /// No cue found; the reference date is used.
    Today,
    Tomorrow,
    NextWeek,
    /// Next occurrence of this weekday strictly after the reference date.
    Weekday(Weekday),
}

impl DateCue {
    /// Stable label for log events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::NextWeek => "next_week",
            Self::Weekday(_) => "weekday",
        }
    }
}

/// Resolves the target date for `input` relative to `today`.
///
/// `tomorrow` beats `next week`. Weekday names are applied afterwards and
/// overwrite either; with several weekday names present the last one in
/// Sunday..Saturday order wins.
pub fn resolve_date(input: &str, today: NaiveDate) -> (NaiveDate, DateCue) {
    let lower = input.to_lowercase();

    let mut resolved = (today, DateCue::Today);
    if lower.contains("tomorrow") {
        resolved = (add_days(today, 1), DateCue::Tomorrow);
    } else if lower.contains("next week") {
        resolved = (add_days(today, 7), DateCue::NextWeek);
    }

    for (name, weekday) in WEEKDAY_NAMES {
        if lower.contains(name) {
            resolved = (next_weekday(today, weekday), DateCue::Weekday(weekday));
        }
    }

    resolved
}

/// Next date after `today` falling on `weekday`; the same weekday is 7 days out.
pub fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_sunday();
    let target = weekday.num_days_from_sunday();
    let diff = match (7 + target - current) % 7 {
        0 => 7,
        days => days,
    };
    add_days(today, u64::from(diff))
}

// Saturates to `today` at the end of the supported calendar range.
fn add_days(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}
