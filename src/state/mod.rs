//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod cursor_handler;
pub mod expand;
pub mod expand_handler;
pub mod match_navigation_handler;
pub mod navigation;
pub mod navigation_handler;
pub mod search;
pub mod search_input_handler;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export for convenience
pub use app_state::AppState;
pub use cursor_handler::handle_cursor_action;
pub use expand::ExpandController;
pub use expand_handler::handle_expand_action;
pub use match_navigation_handler::{next_match, prev_match};
pub use navigation::{NavigationError, ScreenFrame, ScreenStack};
pub use navigation_handler::handle_navigation_action;
pub use search::{match_ranges, NavigatorSnapshot, SearchInput, SearchNavigator, SearchQuery};
