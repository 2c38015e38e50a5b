//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move the selection cursor up one row. Default: k/↑
    CursorUp,
    /// Move the selection cursor down one row. Default: j/↓
    CursorDown,
    /// Jump to the first row. Default: g/Home
    CursorTop,
    /// Jump to the last row. Default: G/End
    CursorBottom,

    // Scrolling
    /// Scroll the body up one page. Default: PageUp/Ctrl+u
    PageUp,
    /// Scroll the body down one page. Default: PageDown/Ctrl+d
    PageDown,

    // Section interaction
    /// Activate the selected row: toggle a section, or open a menu link. Default: Enter/Space
    Activate,
    /// Collapse whatever section is expanded. Default: c
    CollapseAll,

    // Navigation
    /// Return to the previous screen. Default: Backspace/b/←
    Back,
    /// Return to the root screen. Default: H
    Home,

    // Search
    /// Open the search bar. Default: //Ctrl+f
    StartSearch,
    /// Cancel search and clear highlighting. Default: Esc
    CancelSearch,
    /// Focus the next match. Default: n
    NextMatch,
    /// Focus the previous match. Default: N/Shift+n
    PrevMatch,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
