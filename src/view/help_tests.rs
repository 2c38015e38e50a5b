//! Tests for help overlay widget

use super::*;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn buffer_to_string(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(width: u16, height: u16, scroll: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| render_help_overlay(frame, scroll))
        .expect("draw");
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn overlay_has_title_and_border() {
    let out = render(80, 40, 0);
    assert!(out.contains("Keyboard Shortcuts"));
    assert!(out.contains('┌'));
}

#[test]
fn overlay_lists_search_shortcuts() {
    let out = render(80, 40, 0);
    assert!(out.contains("Search"));
    assert!(out.contains("Next match"));
    assert!(out.contains("Previous match"));
}

#[test]
fn overlay_shows_dismiss_hint() {
    let out = render(80, 40, 0);
    assert!(out.contains("Press Esc or ? to close"));
}

#[test]
fn scrolling_hides_first_category() {
    let out = render(80, 40, 2);
    assert!(!out.contains("Navigation"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let _ = render(4, 2, 0);
}

#[test]
fn line_count_covers_every_shortcut() {
    let rows: usize = SHORTCUTS.iter().map(|(_, rows)| rows.len()).sum();
    // Category headings plus blank separators between groups.
    assert_eq!(help_line_count(), rows + SHORTCUTS.len() * 2 - 1);
}
