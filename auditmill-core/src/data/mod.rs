//! Questionnaire and incidence data

pub mod loader;
pub mod models;
pub mod xref;

pub use loader::{load_chapter, load_chapters, load_incidences, load_index};
pub use models::{Chapter, ChapterMeta, Incidence, Question, Reference};
pub use xref::link_incidences;
