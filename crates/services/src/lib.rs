#![forbid(unsafe_code)]

pub mod error;
pub mod library_service;
pub mod seed;
pub mod sessions;

pub use error::LibraryError;
pub use library_service::LibraryService;
pub use seed::{default_catalog, default_question_set};
pub use sessions::{CardView, ReviewSession, SessionProgress, SessionView};
