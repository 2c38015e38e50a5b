//! Section expand/collapse keyboard action handler.
//!
//! Pure functions that transform AppState in response to expand/collapse
//! actions on content screens. Menus are handled by the navigation handler.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle an expand/collapse keyboard action.
///
/// - `Activate` toggles the section under the cursor: collapse it if it is
///   expanded, otherwise expand it alone. Search results are untouched.
/// - `CollapseAll` collapses the expanded section, if any.
///
/// No-op on menu screens and for other actions.
pub fn handle_expand_action(mut state: AppState, action: KeyAction) -> AppState {
    let frame = state.current_mut();
    if frame.screen().is_menu() {
        return state;
    }

    match action {
        KeyAction::Activate => {
            let key = frame
                .navigator
                .sections()
                .get(frame.cursor)
                .map(|section| section.key.clone());
            if let Some(key) = key {
                frame.navigator.toggle(&key);
                frame.reveal_cursor = true;
            }
        }
        KeyAction::CollapseAll => frame.navigator.collapse(),
        _ => {}
    }

    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "expand_handler_tests.rs"]
mod tests;
