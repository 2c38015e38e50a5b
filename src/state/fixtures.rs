//! Shared state fixtures for handler tests.

use crate::content::Catalog;
use crate::model::{Screen, ScreenId, Section, SectionBody, SectionKey, UserType};
use crate::state::{AppState, ScreenStack};
use std::sync::Arc;

pub(crate) fn key(s: &str) -> SectionKey {
    SectionKey::new(s).expect("valid key")
}

pub(crate) fn screen_id(s: &str) -> ScreenId {
    ScreenId::new(s).expect("valid id")
}

/// `home` menu linking to `ee` (three sections) and `tips` (one section).
pub(crate) fn catalog() -> Arc<Catalog> {
    let ee = vec![
        Section::new(key("a"), "Purpose", SectionBody::Prose("alpha beta".into())),
        Section::new(key("b"), "Roles", SectionBody::Prose("gamma beta".into())),
        Section::new(
            key("c"),
            "Criteria",
            SectionBody::Numbered(vec!["Focus".into(), "Knowledge".into()]),
        ),
    ];
    let tips = vec![Section::new(
        key("sleep"),
        "Sleep",
        SectionBody::Prose("Eight hours.".into()),
    )];
    let screens = vec![
        Screen::Menu {
            id: screen_id("home"),
            title: "Home".into(),
            subtitle: None,
            children: vec![screen_id("ee"), screen_id("tips")],
        },
        Screen::Content {
            id: screen_id("ee"),
            title: "Extended Essay".into(),
            sections: Arc::from(ee),
            student_note: Some("Book a session.".into()),
            teacher_note: Some("Sign the form.".into()),
        },
        Screen::Content {
            id: screen_id("tips"),
            title: "Tips".into(),
            sections: Arc::from(tips),
            student_note: None,
            teacher_note: None,
        },
    ];
    Arc::new(Catalog::new(screen_id("home"), screens).expect("valid catalog"))
}

/// State at the home menu.
pub(crate) fn home_state() -> AppState {
    AppState::new(ScreenStack::new(catalog(), UserType::Student))
}

/// State with the `ee` content screen open.
pub(crate) fn ee_state() -> AppState {
    let mut state = home_state();
    state.stack.open(&screen_id("ee")).expect("known screen");
    state
}
