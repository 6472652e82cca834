//! Title extraction: whatever is left after date/time words are stripped.

use crate::model::draft::DEFAULT_TITLE;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static RELATIVE_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tomorrow|today|next week").expect("valid relative day regex"));
static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)sunday|monday|tuesday|wednesday|thursday|friday|saturday")
        .expect("valid weekday regex")
});
static PREPOSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bat\b|\bon\b").expect("valid preposition regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Extracts the display title from `input`.
///
/// Removal order: the matched clock time (`time_span`), relative day words,
/// weekday names, then standalone `at`/`on`. Whitespace is collapsed and
/// trimmed; an empty result becomes `"New Task"`.
pub fn extract_title(input: &str, time_span: Option<Range<usize>>) -> String {
    let without_time = match time_span {
        Some(span) => {
            let mut rest = String::with_capacity(input.len());
            rest.push_str(&input[..span.start]);
            rest.push_str(&input[span.end..]);
            rest
        }
        None => input.to_string(),
    };

    let without_days = RELATIVE_DAY_RE.replace_all(&without_time, "");
    let without_weekdays = WEEKDAY_RE.replace_all(&without_days, "");
    let without_prepositions = PREPOSITION_RE.replace_all(&without_weekdays, "");
    let normalized = WHITESPACE_RE.replace_all(&without_prepositions, " ");

    match normalized.trim() {
        "" => DEFAULT_TITLE.to_string(),
        title => title.to_string(),
    }
}
