//! Acceptance tests: live search, match cycling and highlighting.

use crate::model::UserType;
use crate::state::SearchInput;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn extended_essay() -> AcceptanceTestHarness {
    let mut h = AcceptanceTestHarness::bundled(UserType::Student).expect("bundled harness");
    h.open_link("Subject Guides");
    h.open_link("Extended Essay");
    h
}

fn expanded_key(h: &AcceptanceTestHarness) -> Option<String> {
    h.state()
        .current()
        .navigator
        .expanded()
        .map(|k| k.as_str().to_string())
}

#[test]
fn typing_finds_matches_across_body_kinds() {
    let mut h = extended_essay();
    h.send_key(KeyCode::Char('/'));
    h.type_text("critical");

    let navigator = &h.state().current().navigator;
    let keys: Vec<&str> = navigator.matches().iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["criteria", "pitfalls"]);
    assert_eq!(expanded_key(&h).as_deref(), Some("criteria"));

    let screen = h.render_to_string();
    assert!(screen.contains("Match 1/2"), "{}", screen);
    assert!(screen.contains("Critical thinking"), "{}", screen);
}

#[test]
fn n_cycles_and_wraps() {
    let mut h = extended_essay();
    h.send_key(KeyCode::Char('/'));
    h.type_text("critical");
    h.send_key(KeyCode::Enter);

    h.send_key(KeyCode::Char('n'));
    assert_eq!(expanded_key(&h).as_deref(), Some("pitfalls"));
    assert!(h.render_to_string().contains("Match 2/2"));

    h.send_key(KeyCode::Char('n'));
    assert_eq!(expanded_key(&h).as_deref(), Some("criteria"));

    h.send_key(KeyCode::Char('N'));
    assert_eq!(expanded_key(&h).as_deref(), Some("pitfalls"));
}

#[test]
fn no_match_reports_and_collapses() {
    let mut h = extended_essay();
    h.send_key(KeyCode::Char('/'));
    h.type_text("zzz_no_match");
    h.send_key(KeyCode::Enter);
    h.send_key(KeyCode::Char('n'));

    assert!(h.state().current().navigator.matches().is_empty());
    assert_eq!(expanded_key(&h), None);
    assert!(h.render_to_string().contains("No matches"));
}

#[test]
fn reopening_search_edits_confirmed_query() {
    let mut h = extended_essay();
    h.send_key(KeyCode::Char('/'));
    h.type_text("critic");
    h.send_key(KeyCode::Enter);
    h.send_key(KeyCode::Char('/'));

    assert_eq!(
        h.state().current().search_input,
        SearchInput::Typing {
            query: "critic".into(),
            cursor: 6,
        }
    );
}

#[test]
fn leaving_screen_discards_its_search() {
    let mut h = extended_essay();
    h.send_key(KeyCode::Char('/'));
    h.type_text("essay");
    h.send_key(KeyCode::Enter);
    h.send_key(KeyCode::Backspace);
    h.open_link("Extended Essay");

    let frame = h.state().current();
    assert_eq!(frame.search_input, SearchInput::Inactive);
    assert!(frame.navigator.matches().is_empty());
    assert_eq!(frame.navigator.expanded(), None);
}

#[test]
fn table_cell_matches_are_found() {
    let mut h = AcceptanceTestHarness::bundled(UserType::Student).expect("bundled harness");
    h.open_link("Assessment Rubrics");
    h.send_key(KeyCode::Char('/'));
    h.type_text("27-34");

    assert_eq!(expanded_key(&h).as_deref(), Some("ee_bands"));
    assert!(h.render_to_string().contains("27-34"));
}
