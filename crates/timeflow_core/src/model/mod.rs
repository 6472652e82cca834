//! Schedule domain model produced by the command interpreter.
//!
//! # Responsibility
//! - Define the draft value handed from the interpreter to storage callers.
//! - Keep wall-clock time formatting in one place.
//!
//! # Invariants
//! - Drafts carry no identity; storage collaborators assign one.
//! - Every `ClockTime` is within `00:00..=23:59`.

pub mod clock;
pub mod draft;
