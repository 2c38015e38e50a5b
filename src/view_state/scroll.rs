//! Scroll offset resolution.
//!
//! Offsets are clamped to `[0, max(0, total_height - viewport_height)]` so the
//! viewport is never scrolled past the end of the content.

use std::ops::Range;

/// Largest valid offset for content of `total_height` rows.
pub fn max_offset(total_height: usize, viewport_height: usize) -> usize {
    total_height.saturating_sub(viewport_height)
}

/// Clamp `offset` to the valid range.
pub fn clamp_offset(offset: usize, total_height: usize, viewport_height: usize) -> usize {
    offset.min(max_offset(total_height, viewport_height))
}

/// Smallest change to `offset` that brings `rows` into view.
///
/// A row range taller than the viewport is aligned to its top, so the start
/// of an expanded section is always visible.
pub fn reveal(offset: usize, rows: Range<usize>, viewport_height: usize) -> usize {
    if viewport_height == 0 || rows.start < offset {
        return rows.start;
    }
    let height = rows.end.saturating_sub(rows.start);
    if height > viewport_height {
        return rows.start;
    }
    if rows.end > offset + viewport_height {
        return rows.end - viewport_height;
    }
    offset
}
