//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchInput::Typing variant.
//! All functions are pure - no side effects, testable without TUI.
//! The cursor counts chars, not bytes.

use crate::state::search::{SearchInput, SearchQuery};

/// Byte offset of char position `cursor` in `query`, clamped to the end.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(offset, _)| offset)
}

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchInput. No-op if not in Typing state.
pub fn handle_char_input(state: SearchInput, ch: char) -> SearchInput {
    match state {
        SearchInput::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchInput::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchInput. No-op if not in Typing state.
pub fn handle_backspace(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchInput::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { query, cursor } => SearchInput::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length in chars (does not wrap).
pub fn handle_cursor_right(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchInput::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Open the search bar.
///
/// Inactive starts with an empty query. Active reopens its confirmed query
/// for editing with the cursor at the end. No-op while typing.
pub fn activate_search_input(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Inactive => SearchInput::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchInput::Active { query } => {
            let query = query.as_str().to_string();
            let cursor = query.chars().count();
            SearchInput::Typing { query, cursor }
        }
        typing @ SearchInput::Typing { .. } => typing,
    }
}

/// Cancel search input.
/// Transitions from Typing or Active to Inactive.
pub fn cancel_search(_state: SearchInput) -> SearchInput {
    SearchInput::Inactive
}

/// Submit search query.
/// Transitions from Typing to Active if query is non-empty.
/// If query is empty or whitespace, transitions to Inactive instead.
///
/// No-op if not in Typing state. Evaluation already happened per keystroke;
/// this only changes which keys are live.
pub fn submit_search(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { query, .. } => match SearchQuery::new(query) {
            Some(query) => SearchInput::Active { query },
            None => SearchInput::Inactive,
        },
        other => other,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
