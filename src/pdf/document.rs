//! PDF document backed by lopdf and MuPDF
//!
//! `lopdf` exposes the object structure (page tree, `/Annots`, page boxes);
//! the MuPDF binding does not expose annotation enumeration, but its
//! structured text gives character positions for clipping. Both parse the
//! same bytes.

use std::path::Path;

use crate::document::{AnnotationSource, DocumentError, PageAnnotation, Rect, Result};

use super::annotations::{page_box, page_rotation, read_page_annotations};
use super::text::clipped_text;

const PDF_MIME: &str = "application/pdf";

/// An opened PDF.
///
/// Holds a MuPDF document, so it is neither `Send` nor `Sync`: open and use
/// it on one blocking thread.
pub struct PdfDocument {
    id: String,
    structure: lopdf::Document,
    layout: mupdf::Document,
    page_ids: Vec<lopdf::ObjectId>,
}

impl PdfDocument {
    /// Open a document from bytes
    pub fn from_bytes(data: &[u8], id: String) -> Result<Self> {
        if !data.starts_with(b"%PDF") {
            return Err(DocumentError::UnsupportedFormat(
                "missing %PDF header".into(),
            ));
        }

        let structure = lopdf::Document::load_mem(data)?;
        let layout = mupdf::Document::from_bytes(data, PDF_MIME)?;

        // get_pages is keyed by 1-based page number, so values come out in page order
        let page_ids: Vec<_> = structure.get_pages().into_values().collect();

        let layout_pages = layout.page_count()?.max(0) as usize;
        if layout_pages != page_ids.len() {
            tracing::warn!(
                document = %id,
                structure_pages = page_ids.len(),
                layout_pages,
                "Page count mismatch between PDF backends"
            );
        }

        Ok(Self {
            id,
            structure,
            layout,
            page_ids,
        })
    }

    /// Open a document from a file path
    pub fn from_path<P: AsRef<Path>>(path: P, id: String) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(&data, id)
    }

    /// Get the document ID
    pub fn id(&self) -> &str {
        &self.id
    }

    fn page_id(&self, page_index: usize) -> Result<lopdf::ObjectId> {
        self.page_ids
            .get(page_index)
            .copied()
            .ok_or(DocumentError::PageNotFound(page_index))
    }
}

impl AnnotationSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn annotations(&self, page_index: usize) -> Result<Vec<PageAnnotation>> {
        read_page_annotations(&self.structure, self.page_id(page_index)?)
    }

    fn text_in_rect(&self, page_index: usize, rect: &Rect) -> Result<String> {
        let page_id = self.page_id(page_index)?;
        let visible = page_box(&self.structure, page_id);
        let rotation = page_rotation(&self.structure, page_id);
        let page = self.layout.load_page(page_index as i32)?;
        clipped_text(&page, &rect.to_page_space(&visible, rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = PdfDocument::from_bytes(b"PK\x03\x04not a pdf", "zip".into());
        assert!(matches!(result, Err(DocumentError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_rejects_truncated_pdf() {
        let result = PdfDocument::from_bytes(b"%PDF-1.7\n%%EOF", "broken".into());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PdfDocument::from_path("/nonexistent/input.pdf", "missing".into());
        assert!(matches!(result, Err(DocumentError::IoError(_))));
    }
}
