//! Natural-language scheduling command interpreter.
//!
//! # Responsibility
//! - Turn one typed or transcribed utterance into a `ParsedDraft`.
//! - Resolve relative dates, clock times and the remaining title text.
//!
//! # Invariants
//! - Interpretation is pure: same `(input, now)` gives the same draft.
//! - Only blank input yields no draft; everything else degrades to defaults.
//! - Passes run in fixed order: date, time, title.

pub mod date;
pub mod interpreter;
pub mod time;
pub mod title;

pub use date::DateCue;
pub use interpreter::{interpret, interpret_detailed, interpret_now, Interpretation};
