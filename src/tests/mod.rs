// src/tests/mod.rs

//! Tests for _sshalib_.
//!
//! Tests are placed at `src/tests/`, inside the `sshalib`. This is a
//! reasonable trade-off of separation and access: tests placed at
//! top-level path `tests/` do not have crate-internal visibility, and in
//! practice that makes some tests difficult or impossible to implement.

pub mod entry_tests;
pub mod report_tests;
