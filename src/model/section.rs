//! Sections: the static, expandable blocks of reference content on a screen.

use crate::model::SectionKey;
use serde::Deserialize;

/// A named block of reference content shown inside an expandable list item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    /// Unique key within the owning screen.
    pub key: SectionKey,
    /// Header text, always visible.
    pub title: String,
    /// Content shown when the section is expanded.
    pub body: SectionBody,
}

impl Section {
    /// Create a section.
    pub fn new(key: SectionKey, title: impl Into<String>, body: SectionBody) -> Self {
        Self {
            key,
            title: title.into(),
            body,
        }
    }
}

/// A single study tip: short heading plus explanation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tip {
    /// Short imperative heading ("Plan backwards from the deadline").
    pub heading: String,
    /// Explanation shown under the heading.
    pub detail: String,
}

impl Tip {
    /// Create a tip.
    pub fn new(heading: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            detail: detail.into(),
        }
    }
}

/// Section body, tagged by how it is rendered.
///
/// Adding a new kind means adding a variant here, a `text_pieces` arm and a
/// renderer arm in the view; the compiler points at every place to update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    /// Free-running paragraph text. Blank lines separate paragraphs.
    Prose(String),
    /// Unordered list.
    Bulleted(Vec<String>),
    /// Ordered list, rendered with 1-based numbers.
    Numbered(Vec<String>),
    /// Table with a header row.
    Table {
        /// Column headers.
        headers: Vec<String>,
        /// Data rows. Short rows are padded with empty cells when rendered.
        rows: Vec<Vec<String>>,
    },
    /// Study tips.
    Tips(Vec<Tip>),
}

impl SectionBody {
    /// Short name of the body kind, used in content validation logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SectionBody::Prose(_) => "prose",
            SectionBody::Bulleted(_) => "bulleted",
            SectionBody::Numbered(_) => "numbered",
            SectionBody::Table { .. } => "table",
            SectionBody::Tips(_) => "tips",
        }
    }

    /// The pieces of text the renderer draws, each searched on its own.
    ///
    /// Prose is one piece (a needle never spans its line breaks). Every list
    /// item, table cell, tip heading and tip detail is its own piece, so a
    /// query never matches across the column rules or between a heading and
    /// its detail.
    pub fn text_pieces(&self) -> Vec<&str> {
        match self {
            SectionBody::Prose(text) => vec![text.as_str()],
            SectionBody::Bulleted(items) | SectionBody::Numbered(items) => {
                items.iter().map(String::as_str).collect()
            }
            SectionBody::Table { headers, rows } => std::iter::once(headers)
                .chain(rows.iter())
                .flatten()
                .map(String::as_str)
                .collect(),
            SectionBody::Tips(tips) => tips
                .iter()
                .flat_map(|tip| [tip.heading.as_str(), tip.detail.as_str()])
                .collect(),
        }
    }

    /// True when the body has nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionBody::Prose(text) => text.trim().is_empty(),
            SectionBody::Bulleted(items) | SectionBody::Numbered(items) => items.is_empty(),
            SectionBody::Table { headers, rows } => headers.is_empty() && rows.is_empty(),
            SectionBody::Tips(tips) => tips.is_empty(),
        }
    }
}
