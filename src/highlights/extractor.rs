//! Highlight Extractor
//!
//! Walks the pages of an [`AnnotationSource`], keeps highlight and underline
//! annotations, and recovers the text under each one.
//!
//! # Note
//!
//! Covered text comes from clipping the page text to the annotation's
//! `/Rect`. Multi-line highlights whose rectangle spans partial lines can
//! pick up neighbouring words or miss some.

use crate::document::AnnotationSource;

use super::types::{ExtractedHighlight, ExtractionResult, ExtractionStats, MarkupKind};

/// Extract highlights and underlines from every page.
///
/// Failures on a single page or annotation are logged and skipped.
pub fn extract_highlights<S>(source: &S) -> ExtractionResult
where
    S: AnnotationSource + ?Sized,
{
    let mut highlights = Vec::new();
    let mut stats = ExtractionStats {
        pages: source.page_count(),
        ..Default::default()
    };

    for page_index in 0..source.page_count() {
        let annotations = match source.annotations(page_index) {
            Ok(annotations) => annotations,
            Err(e) => {
                tracing::warn!(page = page_index + 1, "Skipping page, annotations unreadable: {}", e);
                stats.failed += 1;
                continue;
            }
        };

        if annotations.is_empty() {
            continue;
        }

        stats.annotations += annotations.len();
        let page = (page_index + 1) as u32;

        for annotation in annotations {
            let Some(kind) = MarkupKind::from_annotation(annotation.kind) else {
                stats.ignored += 1;
                continue;
            };

            let raw = match source.text_in_rect(page_index, &annotation.rect) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(page, "Skipping {}, text unreadable: {}", kind.label(), e);
                    stats.failed += 1;
                    continue;
                }
            };

            let text = collapse_lines(&raw);
            if text.is_empty() {
                tracing::debug!(page, has_note = annotation.note.is_some(), "Dropping {} with no covered text", kind.label());
                stats.empty += 1;
                continue;
            }

            match kind {
                MarkupKind::Highlight => stats.highlights += 1,
                MarkupKind::Underline => stats.underlines += 1,
            }

            highlights.push(ExtractedHighlight {
                page,
                kind,
                text,
                note: annotation.note,
            });
        }
    }

    tracing::debug!(
        pages = stats.pages,
        annotations = stats.annotations,
        highlights = stats.highlights,
        underlines = stats.underlines,
        empty = stats.empty,
        ignored = stats.ignored,
        failed = stats.failed,
        "Highlight extraction complete"
    );

    ExtractionResult { highlights, stats }
}

/// Trim, then turn every line break into a single space.
///
/// Hyphenated words split across lines keep their hyphen ("qu-\nick"
/// becomes "qu- ick"); joining them is the repair step's job.
pub fn collapse_lines(raw: &str) -> String {
    raw.trim().replace("\r\n", " ").replace(['\n', '\r'], " ")
}
