//! Storage module
//!
//! Local working directory for uploads and generated reports.

mod upload_store;

pub use upload_store::{display_name, report_file_name, StoredUpload, UploadStore};
