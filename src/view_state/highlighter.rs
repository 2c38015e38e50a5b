//! Search highlighting.
//!
//! Splits text into plain and highlighted segments around every
//! case-insensitive literal occurrence of the search needle. Segments borrow
//! from the input and concatenate back to it exactly.

use crate::state::search::match_ranges;
use ratatui::{style::Style, text::Span};

/// Whether a segment is a needle occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Ordinary text.
    Plain,
    /// An occurrence of the needle, original casing preserved.
    Highlighted,
}

/// A contiguous piece of the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text of this piece.
    pub text: &'a str,
    /// Plain or highlighted.
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Plain,
        }
    }

    fn highlighted(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Highlighted,
        }
    }

    /// True for needle occurrences.
    pub fn is_highlighted(&self) -> bool {
        self.kind == SegmentKind::Highlighted
    }
}

/// Split `text` around occurrences of `needle`.
///
/// An empty (after trimming) needle returns the text as one plain segment.
/// Empty text returns no segments. Empty segments are never produced.
pub fn highlight_segments<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for range in match_ranges(text, needle) {
        if range.start > cursor {
            segments.push(Segment::plain(&text[cursor..range.start]));
        }
        segments.push(Segment::highlighted(&text[range.clone()]));
        cursor = range.end;
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}

/// Render `text` as spans, applying `highlight` to needle occurrences and
/// `base` to the rest.
pub fn highlight_spans(text: &str, needle: &str, base: Style, highlight: Style) -> Vec<Span<'static>> {
    highlight_segments(text, needle)
        .into_iter()
        .map(|segment| {
            let style = if segment.is_highlighted() {
                highlight
            } else {
                base
            };
            Span::styled(segment.text.to_string(), style)
        })
        .collect()
}
