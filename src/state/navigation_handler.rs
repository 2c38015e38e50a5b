//! Screen navigation keyboard action handler.

use crate::model::KeyAction;
use crate::state::AppState;
use tracing::warn;

/// Handle a navigation action.
///
/// - `Activate` on a menu opens the link under the cursor
/// - `Back` pops the current screen (no-op at the root)
/// - `Home` returns to the root screen
///
/// Content screens ignore `Activate` here; see the expand handler.
pub fn handle_navigation_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::Activate => {
            let frame = state.current();
            if !frame.screen().is_menu() {
                return state;
            }
            let Some(target) = frame.screen().children().get(frame.cursor).cloned() else {
                return state;
            };
            // Catalog validation guarantees menu links resolve.
            if let Err(e) = state.stack.open(&target) {
                warn!(error = %e, "Menu link did not resolve");
            }
        }
        KeyAction::Back => {
            state.stack.back();
        }
        KeyAction::Home => state.stack.home(),
        _ => {}
    }
    state
}
