//! Document abstraction
//!
//! Types and the [`AnnotationSource`] trait that decouple highlight
//! extraction from the PDF libraries doing the decoding.
//!
//! ```text
//!   highlights::extract_highlights
//!              │
//!              ▼
//!     ┌──────────────────┐
//!     │ AnnotationSource │  page_count / annotations / text_in_rect
//!     └──────────────────┘
//!              │
//!              ▼
//!     pdf::PdfDocument (lopdf structure + MuPDF text layout)
//! ```

mod error;
mod traits;
mod types;

pub use error::{DocumentError, DocumentResult, Result};
pub use traits::AnnotationSource;
pub use types::{AnnotationKind, PageAnnotation, Rect};
