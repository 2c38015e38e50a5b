//! Section search navigator.
//!
//! Owns the per-screen search state: the trimmed query, the ordered set of
//! matching section keys, the focused match, and (through
//! [`ExpandController`]) the single expanded section.
//!
//! Invariants held after every public method returns:
//! - `current_match < matches.len()` when matches is non-empty, else `0`
//! - `expanded` is `None` or a key of one of the sections
//! - an empty or whitespace-only query leaves no matches and nothing expanded

use crate::model::{Section, SectionKey};
use crate::state::expand::ExpandController;
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

// ===== Needle =====

/// Case-insensitive literal search term.
///
/// Matching compares the lowercase expansion of each text character against
/// the lowercased needle, so byte offsets always refer to the original text
/// and fall on char boundaries, even where lowercasing changes byte length.
/// No character has special meaning: `.` matches only a literal dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    lowered: Vec<char>,
}

impl Needle {
    /// Build a needle from a raw query. Returns None if the trimmed query is empty.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                lowered: trimmed.chars().flat_map(char::to_lowercase).collect(),
            })
        }
    }

    /// Length in bytes of the match starting at byte `start`, if any.
    fn match_len_at(&self, text: &str, start: usize) -> Option<usize> {
        let mut pos = 0;
        for (offset, ch) in text[start..].char_indices() {
            for lc in ch.to_lowercase() {
                if self.lowered.get(pos) != Some(&lc) {
                    return None;
                }
                pos += 1;
            }
            if pos == self.lowered.len() {
                return Some(offset + ch.len_utf8());
            }
        }
        None
    }

    /// Byte ranges of all non-overlapping matches, scanning left to right.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        while start < text.len() {
            match self.match_len_at(text, start) {
                Some(len) => {
                    ranges.push(start..start + len);
                    start += len;
                }
                None => {
                    // Advance one char; start is always on a boundary.
                    start += text[start..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        ranges
    }

    /// True if the needle occurs anywhere in `text`.
    pub fn is_in(&self, text: &str) -> bool {
        text.char_indices()
            .any(|(start, _)| self.match_len_at(text, start).is_some())
    }
}

/// Byte ranges of every case-insensitive literal occurrence of `needle` in
/// `text`. Empty when the trimmed needle is empty.
pub fn match_ranges(text: &str, needle: &str) -> Vec<Range<usize>> {
    Needle::new(needle)
        .map(|n| n.find_all(text))
        .unwrap_or_default()
}

// ===== SearchNavigator =====

/// Comparable view of the derived search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorSnapshot {
    /// Matching keys in declaration order.
    pub matches: Vec<SectionKey>,
    /// Focused match index.
    pub current_match: usize,
    /// Expanded section, if any.
    pub expanded: Option<SectionKey>,
}

/// Search, match cycling and expand/collapse over one screen's sections.
#[derive(Debug, Clone)]
pub struct SearchNavigator {
    sections: Arc<[Section]>,
    needle: String,
    matches: Vec<SectionKey>,
    current_match: usize,
    expand: ExpandController<SectionKey>,
}

impl SearchNavigator {
    /// Create a navigator with no query and nothing expanded.
    pub fn new(sections: Arc<[Section]>) -> Self {
        let expand = ExpandController::new(sections.iter().map(|s| s.key.clone()));
        Self {
            sections,
            needle: String::new(),
            matches: Vec::new(),
            current_match: 0,
            expand,
        }
    }

    /// Re-evaluate the search for a raw query.
    ///
    /// Trims the query; an empty result clears matches and collapses everything.
    /// Otherwise collects matching keys in declaration order, focuses the first
    /// and expands it. Running this twice with the same query is a no-op.
    pub fn evaluate(&mut self, raw_query: &str) {
        let Some(needle) = Needle::new(raw_query) else {
            self.needle.clear();
            self.matches.clear();
            self.current_match = 0;
            self.expand.collapse();
            return;
        };

        self.needle = raw_query.trim().to_string();
        self.matches = self
            .sections
            .iter()
            .filter(|section| {
                needle.is_in(&section.title)
                    || section.body.text_pieces().iter().any(|piece| needle.is_in(piece))
            })
            .map(|section| section.key.clone())
            .collect();
        self.current_match = 0;

        match self.matches.first() {
            Some(first) => {
                let first = first.clone();
                self.expand.expand(&first);
            }
            None => self.expand.collapse(),
        }

        debug!(
            query = %self.needle,
            matches = self.matches.len(),
            "Search evaluated"
        );
    }

    /// Focus the next match, wrapping to the first.
    ///
    /// Does nothing unless there are at least two matches. Returns true if the
    /// focus moved.
    pub fn next_match(&mut self) -> bool {
        let len = self.matches.len();
        if len < 2 {
            return false;
        }
        self.focus_match((self.current_match + 1) % len);
        true
    }

    /// Focus the previous match, wrapping to the last.
    ///
    /// Same precondition as [`next_match`](Self::next_match).
    pub fn prev_match(&mut self) -> bool {
        let len = self.matches.len();
        if len < 2 {
            return false;
        }
        self.focus_match((self.current_match + len - 1) % len);
        true
    }

    fn focus_match(&mut self, index: usize) {
        self.current_match = index;
        let key = self.matches[index].clone();
        self.expand.expand(&key);
    }

    /// Manual tap on a section header: collapse it if expanded, else expand
    /// it alone. Unknown keys are ignored.
    pub fn toggle(&mut self, key: &SectionKey) {
        self.expand.toggle(key);
    }

    /// Collapse the expanded section, if any. Search results are untouched.
    pub fn collapse(&mut self) {
        self.expand.collapse();
    }

    /// The trimmed query used for matching and highlighting.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// True while a non-empty query is applied.
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Matching keys in declaration order.
    pub fn matches(&self) -> &[SectionKey] {
        &self.matches
    }

    /// True if `key` is in the match set.
    pub fn is_match(&self, key: &SectionKey) -> bool {
        self.matches.contains(key)
    }

    /// Index of the focused match.
    pub fn current_match(&self) -> usize {
        self.current_match
    }

    /// Key of the focused match, if any.
    pub fn current_key(&self) -> Option<&SectionKey> {
        self.matches.get(self.current_match)
    }

    /// The expanded section, if any.
    pub fn expanded(&self) -> Option<&SectionKey> {
        self.expand.expanded()
    }

    /// True if `key` is the expanded section.
    pub fn is_expanded(&self, key: &SectionKey) -> bool {
        self.expand.is_expanded(key)
    }

    /// Sections this navigator searches.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Declaration index of `key`.
    pub fn position_of(&self, key: &SectionKey) -> Option<usize> {
        self.sections.iter().position(|s| &s.key == key)
    }

    /// Derived state, for comparisons.
    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            matches: self.matches.clone(),
            current_match: self.current_match,
            expanded: self.expand.expanded().cloned(),
        }
    }
}

// ===== SearchInput =====

/// Search bar state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchInput {
    /// Search bar hidden, no query applied.
    #[default]
    Inactive,
    /// User is typing; the query is re-evaluated on every keystroke.
    Typing {
        /// Raw query text.
        query: String,
        /// Cursor position in chars.
        cursor: usize,
    },
    /// Query confirmed; match cycling keys are live.
    Active {
        /// Confirmed query.
        query: SearchQuery,
    },
}

impl SearchInput {
    /// Raw query text, or "" when inactive.
    pub fn query(&self) -> &str {
        match self {
            SearchInput::Inactive => "",
            SearchInput::Typing { query, .. } => query,
            SearchInput::Active { query } => query.as_str(),
        }
    }

    /// True while the user is typing.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchInput::Typing { .. })
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Query text as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
