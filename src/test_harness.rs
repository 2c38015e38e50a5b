//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::KeyBindings;
use crate::content::{self, Catalog};
use crate::model::UserType;
use crate::state::{AppState, ScreenStack};
use crate::view::{ColorConfig, TuiApp, TuiError, ViewStyles};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;
use std::sync::Arc;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Blank lines are removed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over the bundled guides with an 80x24 terminal.
    pub fn bundled(user_type: UserType) -> Result<Self, TuiError> {
        let catalog = content::catalog().map_err(crate::model::AppError::from)?;
        Self::with_catalog(Arc::new(catalog), user_type, 80, 24)
    }

    /// Harness over `catalog` with a custom terminal size.
    pub fn with_catalog(
        catalog: Arc<Catalog>,
        user_type: UserType,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app_state = AppState::new(ScreenStack::new(catalog, user_type));
        let app = TuiApp::new_for_test(
            terminal,
            app_state,
            KeyBindings::default(),
            ViewStyles::new(ColorConfig::enabled(), Color::Yellow),
        );

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        let mods = match key {
            KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
            _ => KeyModifiers::NONE,
        };
        self.send_key_with_mods(key, mods)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Move the cursor to the menu link titled `title` and open it.
    ///
    /// # Panics
    /// If the current screen has no such link.
    pub fn open_link(&mut self, title: &str) {
        let frame = self.state().current();
        let catalog = self.state().stack.catalog();
        let index = frame
            .screen()
            .children()
            .iter()
            .position(|id| catalog.get(id).is_some_and(|s| s.title() == title))
            .unwrap_or_else(|| panic!("no link titled {:?}", title));

        self.send_key(KeyCode::Home);
        for _ in 0..index {
            self.send_key(KeyCode::Down);
        }
        self.send_key(KeyCode::Enter);
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
