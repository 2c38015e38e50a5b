//! Screen layout: every row of the body pane plus where each selectable item
//! starts.
//!
//! The layout is recomputed on every draw from the current frame. Row ranges
//! are what cursor reveal and match navigation scroll to.

use crate::content::Catalog;
use crate::model::{Screen, UserType};
use crate::state::ScreenFrame;
use crate::view_state::renderer::{
    compute_note_lines, compute_section_lines, SectionFlags, SectionStyles,
};
use crate::view_state::wrap::wrap_with_prefix;
use ratatui::text::{Line, Span};
use std::ops::Range;

/// Rendered rows of one screen.
///
/// # Invariants
/// - `row_ranges[i]` covers the rows of selectable item `i`
/// - ranges are in item order, non-overlapping and within `lines`
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    /// All rows, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Rows of each section (content screens) or link (menus).
    pub row_ranges: Vec<Range<usize>>,
}

impl ScreenLayout {
    /// Total height in rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Rows of item `index`, if it exists.
    pub fn rows_of(&self, index: usize) -> Option<Range<usize>> {
        self.row_ranges.get(index).cloned()
    }

    fn push_item(&mut self, lines: Vec<Line<'static>>) {
        let start = self.lines.len();
        self.lines.extend(lines);
        self.row_ranges.push(start..self.lines.len());
    }
}

/// Lay out a content screen: each section with its flags, then the block
/// for `user_type` if the screen has one.
pub fn compute_content_layout(
    frame: &ScreenFrame,
    user_type: UserType,
    styles: &SectionStyles,
    width: usize,
) -> ScreenLayout {
    let navigator = &frame.navigator;
    let current = navigator.current_key();
    let mut layout = ScreenLayout::default();

    for (index, section) in frame.screen().sections().iter().enumerate() {
        let is_match = navigator.is_match(&section.key);
        let flags = SectionFlags {
            selected: index == frame.cursor,
            expanded: navigator.is_expanded(&section.key),
            is_match,
            is_current: is_match && current == Some(&section.key),
        };
        layout.push_item(compute_section_lines(
            section,
            flags,
            navigator.needle(),
            styles,
            width,
        ));
    }

    if let Some(note) = frame.screen().role_note(user_type) {
        layout
            .lines
            .extend(compute_note_lines(user_type.only_label(), note, styles, width));
    }
    layout
}

/// Lay out a menu: optional subtitle, then one entry per child screen.
///
/// Children the catalog cannot resolve are shown by id; the catalog rejects
/// such links at load time, so this only matters for hand-built frames.
pub fn compute_menu_layout(
    frame: &ScreenFrame,
    catalog: &Catalog,
    styles: &SectionStyles,
    width: usize,
) -> ScreenLayout {
    let mut layout = ScreenLayout::default();

    if let Screen::Menu {
        subtitle: Some(subtitle),
        ..
    } = frame.screen()
    {
        layout.lines.extend(wrap_with_prefix(
            Vec::new(),
            &[Span::styled(subtitle.clone(), styles.chrome)],
            width,
        ));
        layout.lines.push(Line::default());
    }

    for (index, child) in frame.screen().children().iter().enumerate() {
        let title = catalog
            .get(child)
            .map(|screen| screen.title().to_string())
            .unwrap_or_else(|| child.to_string());
        let mut style = styles.header;
        if index == frame.cursor {
            style = style.patch(styles.selected);
        }
        layout.push_item(wrap_with_prefix(
            vec![Span::raw("  "), Span::styled("› ", styles.chrome)],
            &[Span::styled(title, style)],
            width,
        ));
    }
    layout
}
