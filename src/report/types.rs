//! Report types

use serde::{Deserialize, Serialize};

use crate::highlights::MarkupKind;

/// One rendered highlight or underline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// Page number (1-indexed)
    pub page: u32,
    pub kind: MarkupKind,
    /// Repaired text
    pub text: String,
    pub note: Option<String>,
}

impl ReportEntry {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Note to render; blank notes count as absent
    pub fn visible_note(&self) -> Option<&str> {
        self.note.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// The entries of one page, in annotation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGroup {
    pub page: u32,
    pub entries: Vec<ReportEntry>,
}

/// A finished reading report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Original upload filename
    pub source_name: String,
    /// Generated summary, empty when unavailable
    pub summary: String,
    pub pages: Vec<PageGroup>,
}

impl Report {
    pub fn new(source_name: impl Into<String>, summary: impl Into<String>, pages: Vec<PageGroup>) -> Self {
        Self {
            source_name: source_name.into(),
            summary: summary.into(),
            pages,
        }
    }

    /// Total entries across all pages
    pub fn entry_count(&self) -> usize {
        self.pages.iter().map(|p| p.entries.len()).sum()
    }
}

/// Fold document-ordered entries into page groups.
///
/// Consecutive entries of the same page share a group; empty groups are
/// never produced.
pub fn group_by_page(entries: Vec<ReportEntry>) -> Vec<PageGroup> {
    let mut groups: Vec<PageGroup> = Vec::new();

    for entry in entries {
        match groups.last_mut() {
            Some(group) if group.page == entry.page => group.entries.push(entry),
            _ => groups.push(PageGroup {
                page: entry.page,
                entries: vec![entry],
            }),
        }
    }

    groups
}
