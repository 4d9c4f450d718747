//! Report pipeline
//!
//! Extraction, repair, summary and assembly for one uploaded document.
//! Everything runs in sequence: the PDF is read on one blocking thread,
//! then each highlight is repaired in document order before a single
//! summary call.

use std::path::{Path, PathBuf};

use crate::document::{AnnotationSource, DocumentError, DocumentResult};
use crate::highlights::{extract_highlights, ExtractedHighlight, ExtractionResult};
use crate::oracle::TextOracle;
use crate::pdf::PdfDocument;
use crate::report::{group_by_page, Report, ReportEntry};

/// Drives a document from annotations to a finished [`Report`]
#[derive(Clone)]
pub struct ReportPipeline {
    oracle: TextOracle,
}

impl ReportPipeline {
    pub fn new(oracle: TextOracle) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &TextOracle {
        &self.oracle
    }

    /// Open the PDF at `path` and build its report.
    ///
    /// Only a failure to open the document is returned; everything after
    /// that degrades instead of failing.
    pub async fn run_file(&self, path: &Path, source_name: &str) -> DocumentResult<Report> {
        let extraction = extract_file(path.to_path_buf(), source_name.to_string()).await?;
        Ok(self.build_report(source_name, extraction.highlights).await)
    }

    /// Build a report from any in-memory document
    pub async fn run_source<S>(&self, source: &S, source_name: &str) -> Report
    where
        S: AnnotationSource + ?Sized,
    {
        let extraction = extract_highlights(source);
        self.build_report(source_name, extraction.highlights).await
    }

    /// Repair each highlight, summarize the repaired corpus, group by page
    pub async fn build_report(&self, source_name: &str, highlights: Vec<ExtractedHighlight>) -> Report {
        let mut entries = Vec::with_capacity(highlights.len());
        let mut corpus = String::new();

        for highlight in highlights {
            let text = self.oracle.repair(&highlight.text).await;
            corpus.push_str(&text);
            corpus.push(' ');

            entries.push(ReportEntry {
                page: highlight.page,
                kind: highlight.kind,
                text,
                note: highlight.note,
            });
        }

        let summary = self.oracle.summarize(&corpus).await;

        tracing::info!(
            source = %source_name,
            entries = entries.len(),
            has_summary = !summary.is_empty(),
            "Report assembled"
        );

        Report::new(source_name, summary, group_by_page(entries))
    }
}

/// Open and extract on a blocking thread; MuPDF documents never leave it
async fn extract_file(path: PathBuf, source_name: String) -> DocumentResult<ExtractionResult> {
    tokio::task::spawn_blocking(move || {
        let document = PdfDocument::from_path(&path, source_name)?;
        tracing::debug!(
            document = %document.id(),
            pages = document.page_count(),
            "Document opened"
        );
        Ok::<_, DocumentError>(extract_highlights(&document))
    })
    .await
    .map_err(|e| DocumentError::WorkerError(format!("Task join error: {}", e)))?
}
