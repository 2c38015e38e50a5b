//! Tests for Needle and SearchNavigator.

use super::*;
use crate::model::SectionBody;

// ===== Helpers =====

fn key(s: &str) -> SectionKey {
    SectionKey::new(s).expect("valid key")
}

fn prose(k: &str, title: &str, body: &str) -> Section {
    Section::new(key(k), title, SectionBody::Prose(body.to_string()))
}

fn purpose_roles() -> SearchNavigator {
    SearchNavigator::new(Arc::from(vec![
        prose("a", "Purpose", "alpha beta"),
        prose("b", "Roles", "gamma beta"),
    ]))
}

fn three_sections() -> SearchNavigator {
    SearchNavigator::new(Arc::from(vec![
        prose("intro", "Introduction", "The essay is a piece of independent research."),
        prose("criteria", "Criteria", "Research question, knowledge, critical thinking."),
        prose("advice", "Advice", "Start your research early."),
    ]))
}

// ===== Needle Tests =====

#[test]
fn needle_rejects_empty_and_whitespace() {
    assert!(Needle::new("").is_none());
    assert!(Needle::new("   \t").is_none());
}

#[test]
fn needle_matches_case_insensitively() {
    let needle = Needle::new("BETA").expect("non-empty");
    assert!(needle.is_in("alpha beta"));
    assert!(!needle.is_in("alpha bet"));
}

#[test]
fn needle_is_trimmed() {
    let needle = Needle::new("  beta  ").expect("non-empty");
    assert!(needle.is_in("alphabeta"));
}

#[test]
fn find_all_returns_non_overlapping_ranges() {
    let ranges = match_ranges("aaaa", "aa");
    assert_eq!(ranges, vec![0..2, 2..4]);
}

#[test]
fn find_all_preserves_original_offsets() {
    let text = "Theory of Knowledge and knowledge";
    let ranges = match_ranges(text, "KNOWLEDGE");
    assert_eq!(ranges.len(), 2);
    assert_eq!(&text[ranges[0].clone()], "Knowledge");
    assert_eq!(&text[ranges[1].clone()], "knowledge");
}

#[test]
fn regex_metacharacters_are_literal() {
    assert!(match_ranges("grade A or B", ".").is_empty());
    assert_eq!(match_ranges("marks: 4.5 / 7", "4.5"), vec![7..10]);
    assert!(match_ranges("abc", "a*").is_empty());
    assert_eq!(match_ranges("(a+b)", "(a+b)"), vec![0..5]);
}

#[test]
fn non_ascii_offsets_fall_on_char_boundaries() {
    let text = "Évaluation interne: ÉVALUATION";
    let ranges = match_ranges(text, "évaluation");
    assert_eq!(ranges.len(), 2);
    for range in ranges {
        assert!(text.is_char_boundary(range.start));
        assert!(text.is_char_boundary(range.end));
    }
}

#[test]
fn lowercase_expansion_does_not_panic() {
    // 'İ' lowercases to two chars; offsets must still index the original.
    let text = "İstanbul istanbul";
    let ranges = match_ranges(text, "i\u{307}stanbul");
    assert_eq!(ranges.len(), 1);
    assert_eq!(&text[ranges[0].clone()], "İstanbul");
}

#[test]
fn empty_needle_yields_no_ranges() {
    assert!(match_ranges("anything", "  ").is_empty());
}

// ===== evaluate Tests =====

#[test]
fn evaluate_matches_in_declaration_order() {
    let mut nav = purpose_roles();
    nav.evaluate("beta");

    assert_eq!(nav.matches(), &[key("a"), key("b")]);
    assert_eq!(nav.current_match(), 0);
    assert_eq!(nav.expanded(), Some(&key("a")));
}

#[test]
fn evaluate_matches_title_only() {
    let mut nav = purpose_roles();
    nav.evaluate("roles");

    assert_eq!(nav.matches(), &[key("b")]);
    assert_eq!(nav.expanded(), Some(&key("b")));
}

#[test]
fn evaluate_is_case_insensitive_and_trims() {
    let mut nav = purpose_roles();
    nav.evaluate("   GAMMA ");

    assert_eq!(nav.needle(), "GAMMA");
    assert_eq!(nav.matches(), &[key("b")]);
}

#[test]
fn evaluate_empty_query_clears_state() {
    let mut nav = purpose_roles();
    nav.evaluate("beta");
    nav.next_match();

    nav.evaluate("   ");

    assert!(nav.matches().is_empty());
    assert_eq!(nav.current_match(), 0);
    assert_eq!(nav.expanded(), None);
    assert!(!nav.is_active());
}

#[test]
fn evaluate_no_match_collapses() {
    let mut nav = purpose_roles();
    nav.toggle(&key("a"));

    nav.evaluate("zzz_no_match");

    assert!(nav.matches().is_empty());
    assert_eq!(nav.expanded(), None);
    assert!(nav.is_active(), "Query is applied even with no matches");
}

#[test]
fn evaluate_resets_current_match() {
    let mut nav = three_sections();
    nav.evaluate("research");
    nav.next_match();
    nav.next_match();
    assert_eq!(nav.current_match(), 2);

    nav.evaluate("researc");

    assert_eq!(nav.current_match(), 0);
    assert_eq!(nav.expanded(), Some(&key("intro")));
}

#[test]
fn evaluate_twice_is_idempotent() {
    let mut nav = three_sections();
    nav.evaluate("research");
    let first = nav.snapshot();
    nav.evaluate("research");
    assert_eq!(nav.snapshot(), first);
}

#[test]
fn evaluate_searches_every_body_kind() {
    let mut nav = SearchNavigator::new(Arc::from(vec![
        Section::new(
            key("bands"),
            "Grade bands",
            SectionBody::Table {
                headers: vec!["Grade".into(), "Marks".into()],
                rows: vec![vec!["A".into(), "27-34".into()]],
            },
        ),
        Section::new(
            key("tips"),
            "Tips",
            SectionBody::Tips(vec![crate::model::Tip::new("Sleep", "Eight hours before exams")]),
        ),
    ]));

    nav.evaluate("27-34");
    assert_eq!(nav.matches(), &[key("bands")]);

    nav.evaluate("eight hours");
    assert_eq!(nav.matches(), &[key("tips")]);
}

#[test]
fn evaluate_does_not_match_across_list_items() {
    let mut nav = SearchNavigator::new(Arc::from(vec![Section::new(
        key("list"),
        "List",
        SectionBody::Bulleted(vec!["alpha".into(), "beta".into()]),
    )]));

    nav.evaluate("alphabeta");

    assert!(nav.matches().is_empty());
}

#[test]
fn evaluate_does_not_match_across_table_cells() {
    let mut nav = SearchNavigator::new(Arc::from(vec![Section::new(
        key("bands"),
        "Grade bands",
        SectionBody::Table {
            headers: vec!["Band".into(), "Marks".into()],
            rows: vec![vec!["A".into(), "27-34".into()]],
        },
    )]));

    nav.evaluate("band | marks");
    assert!(nav.matches().is_empty());

    nav.evaluate("bandmarks");
    assert!(nav.matches().is_empty());
}

#[test]
fn evaluate_does_not_match_across_tip_heading_and_detail() {
    let mut nav = SearchNavigator::new(Arc::from(vec![Section::new(
        key("tips"),
        "Tips",
        SectionBody::Tips(vec![crate::model::Tip::new("Plan", "Start early")]),
    )]));

    nav.evaluate("plan: start");
    assert!(nav.matches().is_empty());

    nav.evaluate("start early");
    assert_eq!(nav.matches(), &[key("tips")]);
}

#[test]
fn case_folding_is_per_character() {
    // Per-char lowercasing folds a word-final capital sigma to medial σ.
    let mut nav = SearchNavigator::new(Arc::from(vec![prose("road", "ΟΔΟΣ", "")]));

    nav.evaluate("οδοσ");
    assert_eq!(nav.matches(), &[key("road")]);

    nav.evaluate("οδος");
    assert!(nav.matches().is_empty());
}

// ===== next_match / prev_match Tests =====

#[test]
fn next_match_advances_and_wraps() {
    let mut nav = purpose_roles();
    nav.evaluate("beta");

    assert!(nav.next_match());
    assert_eq!(nav.current_match(), 1);
    assert_eq!(nav.expanded(), Some(&key("b")));

    assert!(nav.next_match());
    assert_eq!(nav.current_match(), 0);
    assert_eq!(nav.expanded(), Some(&key("a")));
}

#[test]
fn next_match_full_cycle_returns_to_start() {
    let mut nav = three_sections();
    nav.evaluate("research");
    let start = nav.snapshot();
    for _ in 0..nav.matches().len() {
        nav.next_match();
    }
    assert_eq!(nav.snapshot(), start);
}

#[test]
fn next_match_is_noop_with_single_match() {
    let mut nav = purpose_roles();
    nav.evaluate("gamma");
    let before = nav.snapshot();

    assert!(!nav.next_match());
    assert_eq!(nav.snapshot(), before);
}

#[test]
fn next_match_is_noop_with_no_matches() {
    let mut nav = purpose_roles();
    nav.evaluate("zzz_no_match");

    assert!(!nav.next_match());
    assert_eq!(nav.current_match(), 0);
    assert_eq!(nav.expanded(), None);
}

#[test]
fn next_match_is_noop_without_query() {
    let mut nav = purpose_roles();
    nav.toggle(&key("b"));

    assert!(!nav.next_match());
    assert_eq!(nav.expanded(), Some(&key("b")));
}

#[test]
fn prev_match_wraps_to_last() {
    let mut nav = three_sections();
    nav.evaluate("research");

    assert!(nav.prev_match());
    assert_eq!(nav.current_match(), 2);
    assert_eq!(nav.current_key(), Some(&key("advice")));
    assert_eq!(nav.expanded(), Some(&key("advice")));
}

#[test]
fn next_match_re_expands_after_manual_collapse() {
    let mut nav = purpose_roles();
    nav.evaluate("beta");
    nav.toggle(&key("a"));
    assert_eq!(nav.expanded(), None);

    nav.next_match();

    assert_eq!(nav.expanded(), Some(&key("b")));
}

// ===== toggle Tests =====

#[test]
fn toggle_collapses_expanded_key() {
    let mut nav = purpose_roles();
    nav.toggle(&key("a"));
    assert_eq!(nav.expanded(), Some(&key("a")));

    nav.toggle(&key("a"));
    assert_eq!(nav.expanded(), None);
}

#[test]
fn toggle_different_key_expands_only_that_key() {
    let mut nav = purpose_roles();
    nav.toggle(&key("a"));
    nav.toggle(&key("b"));

    assert_eq!(nav.expanded(), Some(&key("b")));
    assert!(!nav.is_expanded(&key("a")));
}

#[test]
fn toggle_unknown_key_is_ignored() {
    let mut nav = purpose_roles();
    nav.toggle(&key("missing"));
    assert_eq!(nav.expanded(), None);
}

#[test]
fn toggle_does_not_change_matches() {
    let mut nav = purpose_roles();
    nav.evaluate("beta");
    nav.toggle(&key("b"));

    assert_eq!(nav.matches(), &[key("a"), key("b")]);
    assert_eq!(nav.current_match(), 0);
}

// ===== Accessor Tests =====

#[test]
fn position_of_returns_declaration_index() {
    let nav = three_sections();
    assert_eq!(nav.position_of(&key("advice")), Some(2));
    assert_eq!(nav.position_of(&key("missing")), None);
}

#[test]
fn empty_section_list_never_matches() {
    let mut nav = SearchNavigator::new(Arc::from(Vec::<Section>::new()));
    nav.evaluate("anything");
    assert!(nav.matches().is_empty());
    assert_eq!(nav.expanded(), None);
    assert!(!nav.next_match());
}

// ===== SearchQuery / SearchInput Tests =====

#[test]
fn search_query_rejects_whitespace_only() {
    assert!(SearchQuery::new("  \t ").is_none());
}

#[test]
fn search_query_preserves_whitespace() {
    let query = SearchQuery::new("  essay  ").expect("valid query");
    assert_eq!(query.as_str(), "  essay  ");
}

#[test]
fn search_input_query_per_state() {
    assert_eq!(SearchInput::Inactive.query(), "");

    let typing = SearchInput::Typing {
        query: "rub".to_string(),
        cursor: 3,
    };
    assert_eq!(typing.query(), "rub");
    assert!(typing.is_typing());

    let active = SearchInput::Active {
        query: SearchQuery::new("rubric").expect("valid query"),
    };
    assert_eq!(active.query(), "rubric");
    assert!(!active.is_typing());
}
