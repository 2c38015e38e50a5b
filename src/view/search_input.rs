//! Search bar widget.

use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the search bar while typing or while a query is confirmed.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    colors: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a search bar over `input`.
    pub fn new(input: &'a SearchInput, colors: bool) -> Self {
        Self { input, colors }
    }

    fn block(&self, title: &'static str, bg: Color) -> Block<'static> {
        let block = Block::default().borders(Borders::ALL).title(title);
        if self.colors {
            block.style(Style::default().bg(bg))
        } else {
            block
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.input {
            SearchInput::Typing { query, cursor } => {
                // Split around the cursor so it can be drawn as a block
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
                let after: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .add_modifier(Modifier::REVERSED | Modifier::BOLD),
                    ),
                    Span::raw(after),
                ]);
                Paragraph::new(line)
                    .block(self.block("Search", Color::DarkGray))
                    .render(area, buf);
            }
            SearchInput::Active { query } => {
                Paragraph::new(Line::from(query.as_str()))
                    .block(self.block("Search (n/N to cycle, Esc to clear)", Color::Blue))
                    .render(area, buf);
            }
            SearchInput::Inactive => {}
        }
    }
}
