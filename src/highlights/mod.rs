//! Highlight extraction
//!
//! Turns the annotations of a document into the ordered list of
//! highlights and underlines that feed the report.

mod extractor;
mod types;

pub use extractor::{collapse_lines, extract_highlights};
pub use types::{ExtractedHighlight, ExtractionResult, ExtractionStats, MarkupKind};
