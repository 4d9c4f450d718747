//! Report assembly
//!
//! Groups repaired entries by page and renders the HTML artifact.

mod html;
mod types;

pub use html::{NO_HIGHLIGHTS, NO_SUMMARY};
pub use types::{group_by_page, PageGroup, Report, ReportEntry};
