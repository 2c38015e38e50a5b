//! Screen navigation stack.
//!
//! Each opened screen gets a fresh [`ScreenFrame`] holding its cursor, scroll
//! offset and search state. Popping a frame discards that state, so reopening
//! a screen always starts with no query and nothing expanded.

use crate::content::Catalog;
use crate::model::{Screen, ScreenId, UserType};
use crate::state::search::{SearchInput, SearchNavigator};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Navigation request for a screen the catalog does not contain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No screen with this id.
    #[error("Unknown screen '{0}'")]
    UnknownScreen(ScreenId),
}

/// Per-screen view state, alive while the screen is on the stack.
#[derive(Debug, Clone)]
pub struct ScreenFrame {
    screen: Arc<Screen>,
    /// Selected row: a section on content screens, a link on menus.
    pub cursor: usize,
    /// First visible line of the body.
    pub scroll: usize,
    /// Set when the next draw should scroll the cursor row into view.
    pub reveal_cursor: bool,
    /// Search bar state.
    pub search_input: SearchInput,
    /// Search and expand state over this screen's sections.
    pub navigator: SearchNavigator,
}

impl ScreenFrame {
    /// Fresh frame for `screen`: cursor on the first row, no search.
    pub fn new(screen: Arc<Screen>) -> Self {
        let navigator = SearchNavigator::new(screen.shared_sections());
        Self {
            screen,
            cursor: 0,
            scroll: 0,
            reveal_cursor: false,
            search_input: SearchInput::Inactive,
            navigator,
        }
    }

    /// The screen this frame shows.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Number of selectable rows: sections or menu links.
    pub fn row_count(&self) -> usize {
        if self.screen.is_menu() {
            self.screen.children().len()
        } else {
            self.screen.sections().len()
        }
    }
}

/// Stack of open screens over a catalog, with the user type fixed for the
/// session.
///
/// The root frame is always present; [`back`](Self::back) never removes it.
#[derive(Debug, Clone)]
pub struct ScreenStack {
    catalog: Arc<Catalog>,
    user_type: UserType,
    root: ScreenFrame,
    stack: Vec<ScreenFrame>,
}

impl ScreenStack {
    /// Start at the catalog's root screen.
    pub fn new(catalog: Arc<Catalog>, user_type: UserType) -> Self {
        let root = ScreenFrame::new(catalog.root());
        Self {
            catalog,
            user_type,
            root,
            stack: Vec::new(),
        }
    }

    /// Push the screen with `id`.
    ///
    /// # Errors
    ///
    /// [`NavigationError::UnknownScreen`] if the catalog has no such screen.
    /// The stack is unchanged in that case.
    pub fn open(&mut self, id: &ScreenId) -> Result<(), NavigationError> {
        let screen = self
            .catalog
            .get(id)
            .ok_or_else(|| NavigationError::UnknownScreen(id.clone()))?;
        info!(screen = %id, depth = self.depth() + 1, "Opened screen");
        self.stack.push(ScreenFrame::new(screen));
        Ok(())
    }

    /// Pop the top screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(frame) => {
                info!(screen = %frame.screen().id(), "Closed screen");
                true
            }
            None => false,
        }
    }

    /// Pop everything above the root.
    pub fn home(&mut self) {
        self.stack.clear();
    }

    /// Top frame.
    pub fn current(&self) -> &ScreenFrame {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Top frame, mutably.
    pub fn current_mut(&mut self) -> &mut ScreenFrame {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of screens above the root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Titles from the root to the current screen.
    pub fn breadcrumb(&self) -> Vec<&str> {
        std::iter::once(&self.root)
            .chain(self.stack.iter())
            .map(|frame| frame.screen().title())
            .collect()
    }

    /// User type for this session. Read-only once the stack exists.
    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    /// The catalog screens are opened from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
