//! Clock-time resolution.
//!
//! Accepted shapes: `3pm`, `3 pm`, `3:30pm`, `3:30 p.m.`, `15:00`, `9`.

use crate::model::clock::ClockTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]{1,2})(?::([0-9]{2}))?\s*(a\.m\.|p\.m\.|am\b|pm\b)?")
        .expect("valid time regex")
});

/// Clock time found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    pub time: ClockTime,
    /// Byte range of the matched text, including any meridiem marker.
    pub span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Finds the leftmost acceptable clock time in `input`.
///
/// The hour is the first one or two digits of a number, so `Room 101` reads
/// as `10`. A candidate whose minutes exceed 59 or whose resolved hour exceeds
/// 23 is skipped together with the rest of its number (`24:15`, `999`), and
/// scanning resumes after it.
pub fn find_time(input: &str) -> Option<TimeMatch> {
    let mut start = 0;
    while let Some(caps) = TIME_RE.captures_at(input, start) {
        let (Some(whole), Some(hour)) = (caps.get(0), caps.get(1)) else {
            return None;
        };
        if let Some(time) = accept_candidate(&caps) {
            return Some(TimeMatch {
                time,
                span: whole.range(),
            });
        }
        let digits_end = caps.get(2).map_or(hour.end(), |m| m.end());
        start = skip_number_tail(input, digits_end);
    }
    None
}

/// Resolves the draft slot start, defaulting to 09:00.
pub fn resolve_start(input: &str) -> (ClockTime, Option<TimeMatch>) {
    match find_time(input) {
        Some(found) => (found.time, Some(found)),
        None => (ClockTime::DEFAULT_START, None),
    }
}

// `from` ends an ASCII digit match; the returned offset stays on a char boundary.
fn skip_number_tail(input: &str, from: usize) -> usize {
    let rest = input[from..].trim_start_matches(|c: char| c.is_ascii_digit() || c == ':');
    input.len() - rest.len()
}

fn accept_candidate(caps: &Captures<'_>) -> Option<ClockTime> {
    let hour = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let minute = match caps.get(2) {
        Some(m) => m.as_str().parse::<u32>().ok()?,
        None => 0,
    };
    let meridiem = caps.get(3).map(|m| {
        if m.as_str().to_ascii_lowercase().starts_with('p') {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    });

    ClockTime::new(apply_meridiem(hour, meridiem), minute).ok()
}

fn apply_meridiem(hour: u32, meridiem: Option<Meridiem>) -> u32 {
    match meridiem {
        Some(Meridiem::Pm) if (1..=11).contains(&hour) => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    }
}

#[cfg(test)]
mod tests {
    use super::{find_time, resolve_start};

    fn hhmm(input: &str) -> Option<String> {
        find_time(input).map(|found| found.time.to_string())
    }

    #[test]
    fn meridiem_variants_resolve() {
        assert_eq!(hhmm("at 3pm").as_deref(), Some("15:00"));
        assert_eq!(hhmm("at 3 PM").as_deref(), Some("15:00"));
        assert_eq!(hhmm("at 3:45 p.m.").as_deref(), Some("15:45"));
        assert_eq!(hhmm("at 12am").as_deref(), Some("00:00"));
        assert_eq!(hhmm("at 12pm").as_deref(), Some("12:00"));
        assert_eq!(hhmm("at 7 a.m.").as_deref(), Some("07:00"));
    }

    #[test]
    fn bare_hours_are_literal() {
        assert_eq!(hhmm("standup 15:00").as_deref(), Some("15:00"));
        assert_eq!(hhmm("standup at 8").as_deref(), Some("08:00"));
    }

    #[test]
    fn span_covers_meridiem_marker() {
        let input = "Lunch at 1:15 pm sharp";
        let found = find_time(input).expect("time should match");
        assert_eq!(&input[found.span], "1:15 pm");
    }

    #[test]
    fn am_inside_a_word_is_not_a_marker() {
        assert_eq!(hhmm("3 amazing ideas").as_deref(), Some("03:00"));
    }

    #[test]
    fn out_of_range_candidates_are_skipped() {
        assert_eq!(hhmm("room 45 at 4pm").as_deref(), Some("16:00"));
        assert_eq!(hhmm("at 9:75").as_deref(), None);
        assert_eq!(hhmm("no digits here"), None);
    }

    #[test]
    fn long_numbers_yield_their_leading_digits() {
        assert_eq!(hhmm("Room 101 at 3pm").as_deref(), Some("10:00"));
        assert_eq!(hhmm("budget 2024 review at 10").as_deref(), Some("20:00"));
    }

    #[test]
    fn rejected_number_is_skipped_whole() {
        assert_eq!(hhmm("Meeting 24:15"), None);
        assert_eq!(hhmm("Shift 25:05pm"), None);
        assert_eq!(hhmm("Shift 24:5"), None);
        assert_eq!(hhmm("ticket 999 at 4pm").as_deref(), Some("16:00"));
        assert_eq!(hhmm("gate 24:15 then 6:30pm").as_deref(), Some("18:30"));
    }

    #[test]
    fn missing_time_defaults_to_nine() {
        let (start, found) = resolve_start("plan the week");
        assert_eq!(start.to_string(), "09:00");
        assert!(found.is_none());
    }
}
