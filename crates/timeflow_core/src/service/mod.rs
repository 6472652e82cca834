//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate interpretation and hand-off to the persistence gateway.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod command_service;
