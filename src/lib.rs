//! GuideMate
//!
//! Terminal reader for IB Diploma Programme reference guides: a screen tree
//! of menus and content screens, where each content screen is a list of
//! expandable sections with live search, match cycling and highlighting.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `state` and
//! `view_state` are pure; `view`, `logging` and the loaders do I/O.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
