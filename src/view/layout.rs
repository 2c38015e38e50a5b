//! Screen layout rendering.
//!
//! Header bar (breadcrumb and user type), body pane, optional search bar
//! and status bar. The body rows come precomputed from the view-state layer;
//! this module only places them.

use crate::state::{AppState, SearchInput};
use crate::view::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::search_input::SearchBar;
use crate::view::styles::ViewStyles;
use crate::view_state::ScreenLayout;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Header bar.
    pub header: Rect,
    /// Scrollable body.
    pub body: Rect,
    /// Search bar, while the search input is open.
    pub search: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` for the current state.
///
/// The search bar takes space only while the search input is not Inactive.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let search_open = !matches!(
        state.current().search_input,
        SearchInput::Inactive
    );
    let search_height = if search_open { SEARCH_INPUT_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(search_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        search: search_open.then_some(chunks[2]),
        status: chunks[3],
    }
}

/// Render the whole screen. `layout.lines` are shown from the current
/// frame's scroll offset.
pub fn render_screen(frame: &mut Frame, state: &AppState, layout: &ScreenLayout, styles: &ViewStyles) {
    let areas = calculate_areas(frame.area(), state);

    render_header(frame, areas.header, state, styles);

    let scroll = state.current().scroll;
    let visible: Vec<Line<'static>> = layout
        .lines
        .iter()
        .skip(scroll)
        .take(areas.body.height as usize)
        .cloned()
        .collect();
    frame.render_widget(Paragraph::new(visible), areas.body);

    if let Some(search_area) = areas.search {
        frame.render_widget(
            SearchBar::new(&state.current().search_input, styles.colors),
            search_area,
        );
    }

    render_status_bar(frame, areas.status, state, styles);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let breadcrumb = state.stack.breadcrumb().join(" › ");
    let role = format!("{} ", capitalize(state.user_type().as_str()));
    let gap = (area.width as usize)
        .saturating_sub(breadcrumb.chars().count() + 1)
        .saturating_sub(role.chars().count());

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(breadcrumb),
        Span::raw(" ".repeat(gap)),
        Span::raw(role),
    ]);
    frame.render_widget(Paragraph::new(line).style(styles.header), area);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Status text: match position while a search is applied, otherwise hints.
pub fn status_text(state: &AppState) -> String {
    let frame = state.current();
    let navigator = &frame.navigator;

    if navigator.is_active() {
        let total = navigator.matches().len();
        return if total == 0 {
            "No matches".to_string()
        } else {
            format!("Match {}/{}", navigator.current_match() + 1, total)
        };
    }

    if frame.screen().is_menu() {
        "Enter: open  Backspace: back  ?: help  q: quit".to_string()
    } else {
        "Enter: expand  /: search  Backspace: back  ?: help  q: quit".to_string()
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let line = Line::from(format!(" {}", status_text(state)));
    frame.render_widget(Paragraph::new(line).style(styles.status), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
