//! PDF backend
//!
//! Implements [`crate::document::AnnotationSource`] for real PDF files.

mod annotations;
mod document;
mod text;

pub use document::PdfDocument;
