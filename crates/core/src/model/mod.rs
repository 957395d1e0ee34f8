mod catalog;
mod course;
mod ids;
mod question;

pub use catalog::{CatalogError, CourseCatalog};
pub use course::{CourseCode, CourseError};
pub use ids::{ParseIdError, QuestionId};
pub use question::{DEFAULT_TOPIC, Question, QuestionDraft, QuestionError, ValidatedQuestion};
