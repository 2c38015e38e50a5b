//! TUI rendering and event loop (impure shell)

pub mod constants;
mod help;
mod layout;
mod search_input;
mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, status_text, ScreenAreas};
pub use search_input::SearchBar;
pub use styles::{section_styles, ColorConfig, ViewStyles};

use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{
    handle_cursor_action, handle_expand_action, handle_navigation_action, next_match, prev_match,
    search_input_handler, AppState,
};
use crate::view_state::{compute_content_layout, compute_menu_layout, scroll, ScreenLayout};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ViewStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: ViewStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings,
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events and
    /// redraws after each key press or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.app_state.current_mut().reveal_cursor = true;
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if rebound or while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.toggle_help();
            return false;
        }

        // Typed characters go to the search bar before key binding dispatch
        if self.app_state.is_typing_search() && !self.app_state.help_visible {
            let input = self.app_state.current().search_input.clone();
            let next = match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(search_input_handler::handle_char_input(input, ch))
                }
                KeyCode::Backspace => Some(search_input_handler::handle_backspace(input)),
                KeyCode::Left => Some(search_input_handler::handle_cursor_left(input)),
                KeyCode::Right => Some(search_input_handler::handle_cursor_right(input)),
                KeyCode::Enter => Some(search_input_handler::submit_search(input)),
                _ => None,
            };
            if let Some(next) = next {
                self.app_state.set_search_input(next);
                return false;
            }
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // Help overlay captures everything except its own scrolling
        if self.app_state.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help => self.app_state.toggle_help(),
                KeyAction::CursorDown | KeyAction::PageDown => {
                    let last = help::help_line_count().saturating_sub(1);
                    self.app_state.help_scroll_offset =
                        (self.app_state.help_scroll_offset + 1).min(last);
                }
                KeyAction::CursorUp | KeyAction::PageUp => {
                    self.app_state.help_scroll_offset =
                        self.app_state.help_scroll_offset.saturating_sub(1);
                }
                _ => {}
            }
            return false;
        }

        debug!(?action, "Dispatching key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),

            KeyAction::CursorUp
            | KeyAction::CursorDown
            | KeyAction::CursorTop
            | KeyAction::CursorBottom
            | KeyAction::PageUp
            | KeyAction::PageDown => {
                let viewport = self.body_viewport_height();
                self.app_state = handle_cursor_action(self.app_state.clone(), action, viewport);
            }

            KeyAction::Activate => {
                self.app_state = if self.app_state.current().screen().is_menu() {
                    handle_navigation_action(self.app_state.clone(), action)
                } else {
                    handle_expand_action(self.app_state.clone(), action)
                };
            }
            KeyAction::CollapseAll => {
                self.app_state = handle_expand_action(self.app_state.clone(), action);
            }
            KeyAction::Back | KeyAction::Home => {
                self.app_state = handle_navigation_action(self.app_state.clone(), action);
            }

            KeyAction::StartSearch => {
                if !self.app_state.current().screen().is_menu() {
                    let input = self.app_state.current().search_input.clone();
                    self.app_state
                        .set_search_input(search_input_handler::activate_search_input(input));
                }
            }
            KeyAction::CancelSearch => {
                let input = self.app_state.current().search_input.clone();
                self.app_state
                    .set_search_input(search_input_handler::cancel_search(input));
            }
            KeyAction::NextMatch => {
                self.app_state = next_match(self.app_state.clone());
            }
            KeyAction::PrevMatch => {
                self.app_state = prev_match(self.app_state.clone());
            }
        }

        false
    }

    fn frame_area(&self) -> Rect {
        match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width.max(1), size.height),
            Err(_) => Rect::new(0, 0, 80, 24),
        }
    }

    fn body_viewport_height(&self) -> usize {
        calculate_areas(self.frame_area(), &self.app_state).body.height as usize
    }

    fn compute_layout(&self, width: usize) -> ScreenLayout {
        let frame = self.app_state.current();
        if frame.screen().is_menu() {
            compute_menu_layout(
                frame,
                self.app_state.stack.catalog(),
                &self.styles.sections,
                width,
            )
        } else {
            compute_content_layout(
                frame,
                self.app_state.user_type(),
                &self.styles.sections,
                width,
            )
        }
    }

    /// Render the current frame
    ///
    /// Lays out the current screen, applies any pending reveal, clamps the
    /// scroll offset, then draws.
    fn draw(&mut self) -> Result<(), TuiError> {
        let areas = calculate_areas(self.frame_area(), &self.app_state);
        let viewport = areas.body.height as usize;
        let screen_layout = self.compute_layout(areas.body.width.max(1) as usize);

        let frame = self.app_state.current_mut();
        if frame.reveal_cursor {
            if let Some(rows) = screen_layout.rows_of(frame.cursor) {
                frame.scroll = scroll::reveal(frame.scroll, rows, viewport);
            }
            frame.reveal_cursor = false;
        }
        frame.scroll = scroll::clamp_offset(frame.scroll, screen_layout.height(), viewport);

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|f| {
            layout::render_screen(f, state, &screen_layout, styles);
            if state.help_visible {
                let offset = u16::try_from(state.help_scroll_offset).unwrap_or(u16::MAX);
                render_help_overlay(f, offset);
            }
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: ViewStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ViewStyles,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, key_bindings, styles)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
