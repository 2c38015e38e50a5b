//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the full TUI shell over the bundled
//! guides with a TestBackend.

mod acceptance_search;
