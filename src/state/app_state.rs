//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! Key handlers are pure functions `AppState -> AppState`; the view layer
//! routes key events to them and never mutates search state directly.

use crate::model::UserType;
use crate::state::navigation::{ScreenFrame, ScreenStack};
use crate::state::search::SearchInput;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Screens**: a stack over the catalog; each frame owns its cursor,
///   scroll offset and search state
/// - **Search**: Inactive → Typing → Active → Inactive, per screen
/// - **Help**: overlay visible or hidden, independent of the screen
#[derive(Debug, Clone)]
pub struct AppState {
    /// Open screens.
    pub stack: ScreenStack,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Scroll offset inside the help overlay.
    pub help_scroll_offset: usize,
}

impl AppState {
    /// Create state showing the stack's current screen.
    pub fn new(stack: ScreenStack) -> Self {
        Self {
            stack,
            help_visible: false,
            help_scroll_offset: 0,
        }
    }

    /// Top screen frame.
    pub fn current(&self) -> &ScreenFrame {
        self.stack.current()
    }

    /// Top screen frame, mutably.
    pub fn current_mut(&mut self) -> &mut ScreenFrame {
        self.stack.current_mut()
    }

    /// Session user type.
    pub fn user_type(&self) -> UserType {
        self.stack.user_type()
    }

    /// True while the search bar is capturing typed characters.
    pub fn is_typing_search(&self) -> bool {
        self.current().search_input.is_typing()
    }

    /// Replace the current screen's search input and re-evaluate the search
    /// if the query text changed.
    ///
    /// When the new query yields matches, the cursor moves to the first one.
    /// Search only applies to content screens; on a menu this is a no-op.
    pub fn set_search_input(&mut self, next: SearchInput) {
        let frame = self.current_mut();
        if frame.screen().is_menu() {
            return;
        }

        let changed = frame.search_input.query() != next.query();
        frame.search_input = next;
        if !changed {
            return;
        }

        let query = frame.search_input.query().to_string();
        frame.navigator.evaluate(&query);
        let first = frame
            .navigator
            .current_key()
            .and_then(|key| frame.navigator.position_of(key));
        if let Some(row) = first {
            frame.cursor = row;
            frame.reveal_cursor = true;
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll_offset = 0;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
