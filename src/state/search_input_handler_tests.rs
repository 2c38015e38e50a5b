//! Tests for search input handler.

use super::*;

fn typing(query: &str, cursor: usize) -> SearchInput {
    SearchInput::Typing {
        query: query.to_string(),
        cursor,
    }
}

// ===== activate_search_input tests =====

#[test]
fn activate_from_inactive_creates_typing_state() {
    let result = activate_search_input(SearchInput::Inactive);
    assert_eq!(result, typing("", 0));
}

#[test]
fn activate_from_typing_is_noop() {
    let state = typing("existing", 5);
    assert_eq!(activate_search_input(state.clone()), state);
}

#[test]
fn activate_from_active_reopens_query_for_editing() {
    let query = SearchQuery::new("rubric").expect("valid query");
    let result = activate_search_input(SearchInput::Active { query });
    assert_eq!(result, typing("rubric", 6));
}

// ===== cancel_search tests =====

#[test]
fn cancel_from_typing_goes_inactive() {
    assert_eq!(cancel_search(typing("abc", 1)), SearchInput::Inactive);
}

#[test]
fn cancel_from_active_goes_inactive() {
    let query = SearchQuery::new("abc").expect("valid query");
    assert_eq!(
        cancel_search(SearchInput::Active { query }),
        SearchInput::Inactive
    );
}

// ===== handle_char_input tests =====

#[test]
fn char_input_appends_at_end() {
    let result = handle_char_input(typing("ess", 3), 'a');
    assert_eq!(result, typing("essa", 4));
}

#[test]
fn char_input_inserts_at_cursor() {
    let result = handle_char_input(typing("tk", 1), 'o');
    assert_eq!(result, typing("tok", 2));
}

#[test]
fn char_input_handles_multibyte_before_cursor() {
    let result = handle_char_input(typing("é", 1), 't');
    assert_eq!(result, typing("ét", 2));

    let result = handle_char_input(typing("ét", 1), 'x');
    assert_eq!(result, typing("éxt", 2));
}

#[test]
fn char_input_is_noop_when_inactive() {
    assert_eq!(
        handle_char_input(SearchInput::Inactive, 'x'),
        SearchInput::Inactive
    );
}

// ===== handle_backspace tests =====

#[test]
fn backspace_removes_char_before_cursor() {
    assert_eq!(handle_backspace(typing("cas", 3)), typing("ca", 2));
}

#[test]
fn backspace_at_start_is_noop() {
    assert_eq!(handle_backspace(typing("cas", 0)), typing("cas", 0));
}

#[test]
fn backspace_removes_multibyte_char() {
    assert_eq!(handle_backspace(typing("aéb", 2)), typing("ab", 1));
}

// ===== cursor movement tests =====

#[test]
fn cursor_left_saturates_at_zero() {
    assert_eq!(handle_cursor_left(typing("ab", 0)), typing("ab", 0));
    assert_eq!(handle_cursor_left(typing("ab", 2)), typing("ab", 1));
}

#[test]
fn cursor_right_saturates_at_char_count() {
    assert_eq!(handle_cursor_right(typing("éé", 2)), typing("éé", 2));
    assert_eq!(handle_cursor_right(typing("éé", 1)), typing("éé", 2));
}

// ===== submit_search tests =====

#[test]
fn submit_non_empty_query_goes_active() {
    let result = submit_search(typing("criteria", 8));
    match result {
        SearchInput::Active { query } => assert_eq!(query.as_str(), "criteria"),
        other => panic!("Expected Active, got {:?}", other),
    }
}

#[test]
fn submit_whitespace_query_goes_inactive() {
    assert_eq!(submit_search(typing("   ", 3)), SearchInput::Inactive);
}

#[test]
fn submit_when_inactive_is_noop() {
    assert_eq!(submit_search(SearchInput::Inactive), SearchInput::Inactive);
}
