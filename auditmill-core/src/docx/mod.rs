//! Word document export for proof reading

pub mod writer;

pub use writer::{export_chapter, export_documents, export_incidences};
