//! Cursor and scrolling keyboard action handler.
//!
//! Pure functions that transform AppState in response to movement actions.
//! The cursor selects a row (section or menu link) on the current screen.
//! Scroll offsets are clamped when the body is laid out, not here.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a cursor or page-scroll action on the current screen.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The movement action to handle
/// * `viewport_height` - Height of the body viewport (for page scrolling)
///
/// Cursor moves saturate at the first and last rows and request that the
/// next draw scrolls the cursor into view. Page scrolling moves the view
/// only.
pub fn handle_cursor_action(
    mut state: AppState,
    action: KeyAction,
    viewport_height: usize,
) -> AppState {
    let frame = state.current_mut();
    let rows = frame.row_count();
    if rows == 0 {
        return state;
    }
    let last = rows - 1;

    match action {
        KeyAction::CursorUp => frame.cursor = frame.cursor.saturating_sub(1),
        KeyAction::CursorDown => frame.cursor = (frame.cursor + 1).min(last),
        KeyAction::CursorTop => frame.cursor = 0,
        KeyAction::CursorBottom => frame.cursor = last,
        KeyAction::PageUp => {
            frame.scroll = frame.scroll.saturating_sub(viewport_height.max(1));
            return state;
        }
        KeyAction::PageDown => {
            frame.scroll += viewport_height.max(1);
            return state;
        }
        _ => return state,
    }

    frame.reveal_cursor = true;
    state
}

// ===== Tests =====
