//! Highlight types

use serde::{Deserialize, Serialize};

use crate::document::AnnotationKind;

/// The markup annotations that end up in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupKind {
    Highlight,
    Underline,
}

impl MarkupKind {
    /// `None` for every annotation kind that is not reported
    pub fn from_annotation(kind: AnnotationKind) -> Option<Self> {
        match kind.type_code() {
            8 => Some(Self::Highlight),
            9 => Some(Self::Underline),
            _ => None,
        }
    }

    /// Upper-case label shown above the entry
    pub fn label(self) -> &'static str {
        match self {
            Self::Highlight => "HIGHLIGHT",
            Self::Underline => "UNDERLINE",
        }
    }

    /// Accent color for the entry border and label
    pub fn color(self) -> &'static str {
        match self {
            Self::Highlight => "#1a73e8",
            Self::Underline => "#e67e22",
        }
    }
}

/// A highlight or underline with the text it covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedHighlight {
    /// Page number (1-indexed)
    pub page: u32,
    pub kind: MarkupKind,
    /// Covered text, trimmed, line breaks replaced by spaces
    pub text: String,
    /// Popup comment, if any
    pub note: Option<String>,
}

/// Extraction statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionStats {
    pub pages: usize,
    pub annotations: usize,
    pub highlights: usize,
    pub underlines: usize,
    /// Highlight/underline annotations dropped for having no covered text
    pub empty: usize,
    /// Annotations of other kinds
    pub ignored: usize,
    /// Pages or annotations skipped because the backend failed on them
    pub failed: usize,
}

/// Result of an extraction pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Highlights in page order, then annotation order
    pub highlights: Vec<ExtractedHighlight>,
    pub stats: ExtractionStats,
}
