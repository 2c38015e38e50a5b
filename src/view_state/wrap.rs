//! Width-aware word wrapping of styled spans.
//!
//! Wrapping happens here rather than in `Paragraph` so the layout knows how
//! many terminal rows each section occupies; scrolling to a section needs
//! exact row offsets.
//!
//! Widths are display columns (`unicode-width`), so CJK and emoji count as
//! two columns. Styles survive wrapping: adjacent characters with the same
//! style are merged back into one span.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

type Cell = (char, Style);

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

fn cells_width(cells: &[Cell]) -> usize {
    cells.iter().map(|(ch, _)| char_width(*ch)).sum()
}

/// Display width of a sequence of spans.
pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

fn cells_to_line(cells: Vec<Cell>) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut text = String::new();
    let mut style: Option<Style> = None;

    for (ch, cell_style) in cells {
        if style != Some(cell_style) {
            if let Some(prev) = style {
                spans.push(Span::styled(std::mem::take(&mut text), prev));
            }
            style = Some(cell_style);
        }
        text.push(ch);
    }
    if let Some(prev) = style {
        spans.push(Span::styled(text, prev));
    }
    Line::from(spans)
}

/// Greedy line builder.
struct Wrapper {
    width: usize,
    lines: Vec<Line<'static>>,
    line: Vec<Cell>,
    line_width: usize,
    spaces: Vec<Cell>,
    word: Vec<Cell>,
}

impl Wrapper {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
            line: Vec::new(),
            line_width: 0,
            spaces: Vec::new(),
            word: Vec::new(),
        }
    }

    fn push(&mut self, cell: Cell) {
        if cell.0.is_whitespace() {
            self.flush_word();
            self.spaces.push(cell);
        } else {
            self.word.push(cell);
        }
    }

    fn break_line(&mut self) {
        self.lines.push(cells_to_line(std::mem::take(&mut self.line)));
        self.line_width = 0;
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.word);
        let spaces = std::mem::take(&mut self.spaces);
        let word_width = cells_width(&word);
        let space_width = cells_width(&spaces);

        if self.line_width + space_width + word_width <= self.width {
            // Leading spaces on the first line are kept as indentation.
            self.line.extend(spaces);
            self.line.extend(word);
            self.line_width += space_width + word_width;
        } else if word_width <= self.width {
            self.break_line();
            self.line = word;
            self.line_width = word_width;
        } else {
            // Word longer than a whole line: hard-break it.
            if !self.line.is_empty() {
                self.break_line();
            }
            for cell in word {
                let w = char_width(cell.0);
                if self.line_width + w > self.width && !self.line.is_empty() {
                    self.break_line();
                }
                self.line.push(cell);
                self.line_width += w;
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_word();
        if !self.line.is_empty() || self.lines.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

/// Wrap one logical line of styled spans to `width` columns.
///
/// Breaks at whitespace; whitespace at a break is dropped. Words wider than
/// the line are split between characters. Always returns at least one line,
/// so an empty input yields one empty line.
pub fn wrap_spans(spans: &[Span<'_>], width: usize) -> Vec<Line<'static>> {
    let mut wrapper = Wrapper::new(width);
    for span in spans {
        for ch in span.content.chars() {
            wrapper.push((ch, span.style));
        }
    }
    wrapper.finish()
}

/// Wrap with a hanging indent: `prefix` starts the first line and later lines
/// are indented by its width.
pub fn wrap_with_prefix(
    prefix: Vec<Span<'static>>,
    spans: &[Span<'_>],
    width: usize,
) -> Vec<Line<'static>> {
    let indent = spans_width(&prefix);
    let body_width = width.saturating_sub(indent).max(1);
    let mut prefix = Some(prefix);

    wrap_spans(spans, body_width)
        .into_iter()
        .map(|line| {
            let mut out = prefix
                .take()
                .unwrap_or_else(|| vec![Span::raw(" ".repeat(indent))]);
            out.extend(line.spans);
            Line::from(out)
        })
        .collect()
}
