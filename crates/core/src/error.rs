use thiserror::Error;

use crate::model::{CatalogError, CourseError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
