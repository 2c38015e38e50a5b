//! Identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time. Deserialization
//! goes through the same constructor, so content packs cannot smuggle in blank
//! keys.

use serde::Deserialize;
use std::fmt;

/// Key of a section, unique within its screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct SectionKey(String);

impl SectionKey {
    /// Smart constructor: validates non-empty key.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSectionKey> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidSectionKey::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionKey {
    type Error = InvalidSectionKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a screen in the navigation tree (e.g. "extended-essay").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct ScreenId(String);

impl ScreenId {
    /// Smart constructor: validates non-empty screen ID.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidScreenId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidScreenId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ScreenId {
    type Error = InvalidScreenId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected section key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSectionKey {
    /// Key was empty or whitespace.
    #[error("Section key cannot be empty")]
    Empty,
}

/// Rejected screen id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidScreenId {
    /// Id was empty or whitespace.
    #[error("Screen ID cannot be empty")]
    Empty,
}

// ===== Tests =====
