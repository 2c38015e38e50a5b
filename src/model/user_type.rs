//! Reader role passed through navigation.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Who is reading: controls which role-specific block a screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Diploma Programme student.
    #[default]
    Student,
    /// Teacher or supervisor.
    Teacher,
}

impl UserType {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Teacher => "teacher",
        }
    }

    /// Heading of the role-specific block ("Student-Only" / "Teacher-Only").
    pub fn only_label(self) -> &'static str {
        match self {
            UserType::Student => "Student-Only",
            UserType::Teacher => "Teacher-Only",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected user type string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown user type '{0}' (expected 'student' or 'teacher')")]
pub struct InvalidUserType(pub String);

impl FromStr for UserType {
    type Err = InvalidUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserType::Student),
            "teacher" => Ok(UserType::Teacher),
            _ => Err(InvalidUserType(s.to_string())),
        }
    }
}
