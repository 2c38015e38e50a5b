//! Section rendering: header rows and expanded bodies as wrapped lines.
//!
//! This is the single source of truth for how many rows a section takes.
//! The screen layout stacks these lines and records where each section
//! starts, which is what cursor reveal and match navigation scroll to.

use crate::model::{Section, SectionBody, Tip};
use crate::view_state::highlighter::highlight_spans;
use crate::view_state::wrap::{spans_width, wrap_spans, wrap_with_prefix};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Styles the section renderer needs. Built by the view from the color
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyles {
    /// Collapsed/expanded section title.
    pub header: Style,
    /// Extra style for the title under the cursor.
    pub selected: Style,
    /// Body text.
    pub body: Style,
    /// List markers, table rules and similar chrome.
    pub chrome: Style,
    /// Needle occurrences.
    pub highlight: Style,
    /// Needle occurrences inside the focused match.
    pub current_highlight: Style,
    /// Marker next to titles of matching sections.
    pub match_marker: Style,
    /// Role-only block heading.
    pub note_heading: Style,
    /// Role-only block text.
    pub note_body: Style,
}

impl Default for SectionStyles {
    fn default() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            body: Style::default(),
            chrome: Style::default().add_modifier(Modifier::DIM),
            highlight: Style::default().add_modifier(Modifier::UNDERLINED),
            current_highlight: Style::default()
                .add_modifier(Modifier::UNDERLINED)
                .add_modifier(Modifier::BOLD),
            match_marker: Style::default().add_modifier(Modifier::BOLD),
            note_heading: Style::default().add_modifier(Modifier::BOLD),
            note_body: Style::default().add_modifier(Modifier::ITALIC),
        }
    }
}

/// Per-section render flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionFlags {
    /// Cursor is on this section.
    pub selected: bool,
    /// Body is shown.
    pub expanded: bool,
    /// Section is in the match set.
    pub is_match: bool,
    /// Section is the focused match.
    pub is_current: bool,
}

const BODY_INDENT: &str = "    ";

/// Compute rendered lines for a section: header, then the body if expanded.
///
/// Needle occurrences are highlighted in the title and in every body kind.
/// The focused match uses the stronger highlight.
pub fn compute_section_lines(
    section: &Section,
    flags: SectionFlags,
    needle: &str,
    styles: &SectionStyles,
    width: usize,
) -> Vec<Line<'static>> {
    let highlight = if flags.is_current {
        styles.current_highlight
    } else {
        styles.highlight
    };

    let mut lines = header_lines(section, flags, needle, styles, highlight, width);
    if flags.expanded {
        lines.extend(body_lines(&section.body, needle, styles, highlight, width));
        lines.push(Line::default());
    }
    lines
}

fn header_lines(
    section: &Section,
    flags: SectionFlags,
    needle: &str,
    styles: &SectionStyles,
    highlight: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let mut title_style = styles.header;
    if flags.selected {
        title_style = title_style.patch(styles.selected);
    }

    let arrow = if flags.expanded { "▾ " } else { "▸ " };
    let mut prefix = vec![Span::styled(arrow, styles.chrome)];
    if flags.is_match {
        prefix.insert(0, Span::styled("● ", styles.match_marker));
    } else {
        prefix.insert(0, Span::raw("  "));
    }

    let title = highlight_spans(
        &section.title,
        needle,
        title_style,
        title_style.patch(highlight),
    );
    wrap_with_prefix(prefix, &title, width)
}

fn body_lines(
    body: &SectionBody,
    needle: &str,
    styles: &SectionStyles,
    highlight: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let hl = styles.body.patch(highlight);
    let text = |s: &str| highlight_spans(s, needle, styles.body, hl);

    match body {
        SectionBody::Prose(prose) => prose
            .lines()
            .flat_map(|line| {
                if line.trim().is_empty() {
                    vec![Line::default()]
                } else {
                    wrap_with_prefix(vec![Span::raw(BODY_INDENT)], &text(line), width)
                }
            })
            .collect(),
        SectionBody::Bulleted(items) => items
            .iter()
            .flat_map(|item| {
                let marker = vec![
                    Span::raw(BODY_INDENT),
                    Span::styled("• ", styles.chrome),
                ];
                wrap_with_prefix(marker, &text(item), width)
            })
            .collect(),
        SectionBody::Numbered(items) => {
            let digits = items.len().to_string().len();
            items
                .iter()
                .enumerate()
                .flat_map(|(i, item)| {
                    let marker = vec![
                        Span::raw(BODY_INDENT),
                        Span::styled(format!("{:>digits$}. ", i + 1), styles.chrome),
                    ];
                    wrap_with_prefix(marker, &text(item), width)
                })
                .collect()
        }
        SectionBody::Table { headers, rows } => table_lines(headers, rows, &text, styles, width),
        SectionBody::Tips(tips) => tips
            .iter()
            .flat_map(|tip| tip_lines(tip, needle, styles, highlight, width))
            .collect(),
    }
}

fn tip_lines(
    tip: &Tip,
    needle: &str,
    styles: &SectionStyles,
    highlight: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let heading_style = styles.body.add_modifier(Modifier::BOLD);
    let heading = highlight_spans(
        &tip.heading,
        needle,
        heading_style,
        heading_style.patch(highlight),
    );
    let detail = highlight_spans(&tip.detail, needle, styles.body, styles.body.patch(highlight));

    let mut lines = wrap_with_prefix(
        vec![Span::raw(BODY_INDENT), Span::styled("✦ ", styles.chrome)],
        &heading,
        width,
    );
    let detail_indent = format!("{}  ", BODY_INDENT);
    lines.extend(wrap_with_prefix(vec![Span::raw(detail_indent)], &detail, width));
    lines
}

fn table_lines(
    headers: &[String],
    rows: &[Vec<String>],
    text: &dyn Fn(&str) -> Vec<Span<'static>>,
    styles: &SectionStyles,
    width: usize,
) -> Vec<Line<'static>> {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);
    if columns == 0 {
        return Vec::new();
    }

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            std::iter::once(cell(headers, col))
                .chain(rows.iter().map(|row| cell(row, col)))
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_row = |row: &[String], bold: bool| -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw(BODY_INDENT)];
        for (col, col_width) in widths.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled(" │ ", styles.chrome));
            }
            let mut cell_spans = text(cell(row, col));
            if bold {
                for span in &mut cell_spans {
                    span.style = span.style.add_modifier(Modifier::BOLD);
                }
            }
            let pad = col_width.saturating_sub(spans_width(&cell_spans));
            spans.extend(cell_spans);
            if pad > 0 && col + 1 < columns {
                spans.push(Span::raw(" ".repeat(pad)));
            }
        }
        spans
    };

    let mut lines = Vec::new();
    if !headers.is_empty() {
        lines.extend(wrap_spans(&render_row(headers, true), width));
        let rule_width: usize = widths.iter().sum::<usize>() + 3 * (columns - 1);
        lines.push(Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled("─".repeat(rule_width), styles.chrome),
        ]));
    }
    for row in rows {
        lines.extend(wrap_spans(&render_row(row.as_slice(), false), width));
    }
    lines
}

fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// Lines for the role-only block: heading plus wrapped note.
pub fn compute_note_lines(
    label: &str,
    note: &str,
    styles: &SectionStyles,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(label.to_string(), styles.note_heading)),
    ];
    for paragraph in note.lines() {
        lines.extend(wrap_with_prefix(
            vec![Span::raw("  ")],
            &[Span::styled(paragraph.to_string(), styles.note_body)],
            width,
        ));
    }
    lines
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod renderer_tests;
