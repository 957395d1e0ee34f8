use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course code cannot be empty")]
    EmptyCode,

    #[error("course selection label has no code token")]
    EmptyLabel,
}

//
// ─── COURSE CODE ───────────────────────────────────────────────────────────────
//

/// Canonical course key, e.g. `IE553`.
///
/// Selection labels shown to the user carry a descriptive title after the
/// code; the code alone is what records are filtered on.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Creates a course code from an already-canonical token.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyCode` if the token is empty or whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, CourseError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CourseError::EmptyCode);
        }
        Ok(Self(code.trim().to_owned()))
    }

    /// Reduces a selection label to its course code: the first
    /// whitespace-delimited token (`"IE553 Linear Optimization"` → `IE553`).
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyLabel` if the label contains no token.
    pub fn from_label(label: &str) -> Result<Self, CourseError> {
        label
            .split_whitespace()
            .next()
            .map(|code| Self(code.to_owned()))
            .ok_or(CourseError::EmptyLabel)
    }

    /// Returns the canonical code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourseCode({})", self.0)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_reduces_to_first_token() {
        let code = CourseCode::from_label("IE553 Linear Optimization").unwrap();
        assert_eq!(code.as_str(), "IE553");
    }

    #[test]
    fn bare_code_label_is_accepted() {
        let code = CourseCode::from_label("IE455").unwrap();
        assert_eq!(code.as_str(), "IE455");
    }

    #[test]
    fn label_with_leading_whitespace_still_parses() {
        let code = CourseCode::from_label("  IE553  Simplex").unwrap();
        assert_eq!(code.as_str(), "IE553");
    }

    #[test]
    fn empty_label_is_rejected() {
        assert_eq!(CourseCode::from_label("   "), Err(CourseError::EmptyLabel));
    }

    #[test]
    fn empty_code_is_rejected() {
        assert_eq!(CourseCode::new(""), Err(CourseError::EmptyCode));
    }
}
