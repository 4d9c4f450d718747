//! Document traits
//!
//! The narrow surface the highlight extractor needs from a PDF library.

use super::error::Result;
use super::types::{PageAnnotation, Rect};

/// Page-level access to annotations and their underlying text.
///
/// Page indices are 0-based. Implementations are free to be `!Send`; the
/// extractor runs on a single blocking thread.
pub trait AnnotationSource {
    /// Number of pages
    fn page_count(&self) -> usize;

    /// Annotations of a page in the order the page lists them
    fn annotations(&self, page_index: usize) -> Result<Vec<PageAnnotation>>;

    /// Page text clipped to a user-space rectangle, one line per text line
    fn text_in_rect(&self, page_index: usize, rect: &Rect) -> Result<String>;
}
