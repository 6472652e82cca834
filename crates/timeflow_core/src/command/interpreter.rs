//! Command interpreter entry points.
//!
//! # Responsibility
//! - Short-circuit blank input to "no match".
//! - Run date, time and title passes over the same input and assemble a draft.
//!
//! # Invariants
//! - No I/O besides metadata-only debug logs; utterance text is never logged.
//! - No timezone conversion: `now` is taken as local wall-clock.

use crate::command::date::{resolve_date, DateCue};
use crate::command::time::resolve_start;
use crate::command::title::extract_title;
use crate::model::draft::ParsedDraft;
use chrono::{Local, NaiveDateTime};
use log::debug;

/// Draft plus the evidence that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub draft: ParsedDraft,
    pub date_cue: DateCue,
    /// Exact clock-time text that was matched, if any.
    pub matched_time: Option<String>,
}

/// Interprets one utterance relative to `now`.
///
/// Returns `None` only when `input` is empty or whitespace-only.
pub fn interpret(input: &str, now: NaiveDateTime) -> Option<ParsedDraft> {
    interpret_detailed(input, now).map(|interpretation| interpretation.draft)
}

/// Interprets one utterance relative to the system's local wall-clock time.
pub fn interpret_now(input: &str) -> Option<ParsedDraft> {
    interpret(input, Local::now().naive_local())
}

/// Same as [`interpret`], but also reports which cues were recognized.
pub fn interpret_detailed(input: &str, now: NaiveDateTime) -> Option<Interpretation> {
    if input.trim().is_empty() {
        debug!("event=command_interpret module=command status=no_match reason=blank_input");
        return None;
    }

    let (date, date_cue) = resolve_date(input, now.date());
    let (start_time, time_match) = resolve_start(input);
    let matched_time = time_match
        .as_ref()
        .map(|found| input[found.span.clone()].to_string());
    let title = extract_title(input, time_match.map(|found| found.span));

    debug!(
        "event=command_interpret module=command status=ok date_cue={} has_time={} input_chars={}",
        date_cue.label(),
        matched_time.is_some(),
        input.chars().count()
    );

    Some(Interpretation {
        draft: ParsedDraft::new(title, date, start_time),
        date_cue,
        matched_time,
    })
}
