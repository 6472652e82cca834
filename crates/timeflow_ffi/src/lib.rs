//! Flutter bridge crate for TimeFlow core.
//!
//! Only `api` is exposed to FRB codegen; everything else stays in core.

pub mod api;
