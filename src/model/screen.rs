//! Screens: nodes of the navigation tree.

use crate::model::{ScreenId, Section, UserType};
use serde::Deserialize;
use std::sync::Arc;

/// A node in the navigation tree.
///
/// Menus only link to other screens. Content screens hold the ordered,
/// searchable sections plus optional role-specific notes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Screen {
    /// List of links to child screens.
    Menu {
        /// Screen id.
        id: ScreenId,
        /// Title shown in the header.
        title: String,
        /// One-line description shown above the links.
        #[serde(default)]
        subtitle: Option<String>,
        /// Child screens in display order.
        children: Vec<ScreenId>,
    },
    /// Expandable list of reference sections.
    Content {
        /// Screen id.
        id: ScreenId,
        /// Title shown in the header.
        title: String,
        /// Sections in declaration order.
        sections: Arc<[Section]>,
        /// Block shown only to students.
        #[serde(default)]
        student_note: Option<String>,
        /// Block shown only to teachers.
        #[serde(default)]
        teacher_note: Option<String>,
    },
}

impl Screen {
    /// Screen id.
    pub fn id(&self) -> &ScreenId {
        match self {
            Screen::Menu { id, .. } | Screen::Content { id, .. } => id,
        }
    }

    /// Screen title.
    pub fn title(&self) -> &str {
        match self {
            Screen::Menu { title, .. } | Screen::Content { title, .. } => title,
        }
    }

    /// True for menu screens.
    pub fn is_menu(&self) -> bool {
        matches!(self, Screen::Menu { .. })
    }

    /// Child links. Empty for content screens.
    pub fn children(&self) -> &[ScreenId] {
        match self {
            Screen::Menu { children, .. } => children,
            Screen::Content { .. } => &[],
        }
    }

    /// Sections in declaration order. Empty for menus.
    pub fn sections(&self) -> &[Section] {
        match self {
            Screen::Menu { .. } => &[],
            Screen::Content { sections, .. } => sections,
        }
    }

    /// Shared handle to the section list, for the per-screen search state.
    pub fn shared_sections(&self) -> Arc<[Section]> {
        match self {
            Screen::Menu { .. } => Arc::from(Vec::<Section>::new()),
            Screen::Content { sections, .. } => Arc::clone(sections),
        }
    }

    /// The role-specific block for `user`, if this screen has one.
    pub fn role_note(&self, user: UserType) -> Option<&str> {
        match self {
            Screen::Menu { .. } => None,
            Screen::Content {
                student_note,
                teacher_note,
                ..
            } => match user {
                UserType::Student => student_note.as_deref(),
                UserType::Teacher => teacher_note.as_deref(),
            },
        }
    }
}
