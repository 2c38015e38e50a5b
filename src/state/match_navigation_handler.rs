//! Match navigation handler.
//!
//! Pure functions for cycling between search matches on the current screen.
//! The navigator expands the focused match; these move the cursor onto it.

use crate::state::AppState;

/// Focus the next match, wrapping to the first.
///
/// Behavior:
/// - Does nothing with fewer than two matches
/// - Expands the newly focused section and collapses the previous one
/// - Moves the cursor to that section and scrolls it into view
pub fn next_match(mut state: AppState) -> AppState {
    let frame = state.current_mut();
    if frame.navigator.next_match() {
        follow_current_match(&mut state);
    }
    state
}

/// Focus the previous match, wrapping to the last.
///
/// Same behavior as [`next_match`] in the other direction.
pub fn prev_match(mut state: AppState) -> AppState {
    let frame = state.current_mut();
    if frame.navigator.prev_match() {
        follow_current_match(&mut state);
    }
    state
}

// ===== Helper Functions =====

fn follow_current_match(state: &mut AppState) {
    let frame = state.current_mut();
    let row = frame
        .navigator
        .current_key()
        .and_then(|key| frame.navigator.position_of(key));
    if let Some(row) = row {
        frame.cursor = row;
        frame.reveal_cursor = true;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "match_navigation_handler_tests.rs"]
mod tests;
