//! Highlight Report Server Library
//!
//! Extracts highlighted and underlined passages from a PDF, repairs
//! extraction artifacts through a generative-text service, and renders a
//! styled HTML reading report. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `document`: annotation types and the `AnnotationSource` trait
//! - `pdf`: `AnnotationSource` for real PDFs (lopdf + MuPDF)
//! - `highlights`: highlight/underline extraction
//! - `oracle`: text repair and summary with fallbacks
//! - `report`: page grouping and HTML rendering
//! - `pipeline`: extraction -> repair -> summary -> report
//! - `storage`, `routes`, `state`, `config`, `error`: the HTTP service

pub mod config;
pub mod document;
pub mod error;
pub mod highlights;
pub mod oracle;
pub mod pdf;
pub mod pipeline;
pub mod report;
pub mod routes;
pub mod state;
pub mod storage;
