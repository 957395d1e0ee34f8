use thiserror::Error;

use crate::model::course::{CourseCode, CourseError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("course catalog cannot be empty")]
    Empty,

    #[error("unknown course selection: {0}")]
    UnknownSelection(String),

    #[error(transparent)]
    Course(#[from] CourseError),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The fixed set of selectable courses.
///
/// Each entry is a human-readable label whose first token is the canonical
/// course code. This is configuration owned by the binary; the catalog's
/// first course doubles as the default course for records that carry no
/// `lesson` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCatalog {
    labels: Vec<String>,
    codes: Vec<CourseCode>,
}

impl CourseCatalog {
    /// Builds a catalog from selection labels.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no labels are given, or a
    /// `CourseError` when a label has no code token.
    pub fn new(labels: Vec<String>) -> Result<Self, CatalogError> {
        if labels.is_empty() {
            return Err(CatalogError::Empty);
        }

        let codes = labels
            .iter()
            .map(|label| CourseCode::from_label(label))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { labels, codes })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn codes(&self) -> &[CourseCode] {
        &self.codes
    }

    /// Course used for records that name none.
    #[must_use]
    pub fn default_course(&self) -> &CourseCode {
        // The constructor rejects empty catalogs.
        &self.codes[0]
    }

    #[must_use]
    pub fn contains(&self, course: &CourseCode) -> bool {
        self.codes.contains(course)
    }

    /// Resolves a selection (full label or bare code) to a catalog course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSelection` when the selection matches
    /// no catalog entry.
    pub fn resolve(&self, selection: &str) -> Result<CourseCode, CatalogError> {
        let code = CourseCode::from_label(selection)?;
        if self.contains(&code) {
            return Ok(code);
        }
        Err(CatalogError::UnknownSelection(selection.to_owned()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CourseCatalog {
        CourseCatalog::new(vec![
            "IE553 Linear Optimization".to_owned(),
            "IE455 Network Optimization".to_owned(),
        ])
        .unwrap()
    }

    #[test]
    fn first_entry_is_the_default_course() {
        assert_eq!(catalog().default_course().as_str(), "IE553");
    }

    #[test]
    fn resolves_full_labels_and_bare_codes() {
        let catalog = catalog();
        let from_label = catalog.resolve("IE455 Network Optimization").unwrap();
        let from_code = catalog.resolve("IE455").unwrap();
        assert_eq!(from_label, from_code);
    }

    #[test]
    fn unknown_selection_is_rejected() {
        let err = catalog().resolve("MATH101 Calculus").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSelection(_)));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            CourseCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }
}
