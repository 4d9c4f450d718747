//! Upload Store
//!
//! Working directory for uploaded PDFs and generated reports. Files are
//! keyed by a generated UUID so concurrent uploads of the same filename
//! never share a path; an in-memory registry maps each id back to the name
//! the user uploaded. Uploads older than the retention window are evicted,
//! registry entry and files both, whenever a new upload arrives.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Suffix that replaces `.pdf` in report filenames
const REPORT_SUFFIX: &str = "_Report.html";

/// One stored upload and its report location
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub id: Uuid,
    /// Filename as the user sent it (final path component only)
    pub display_name: String,
    pub source_path: PathBuf,
    pub report_path: PathBuf,
    pub received_at: DateTime<Utc>,
}

impl StoredUpload {
    /// Download name for the report, derived from the display name
    pub fn report_name(&self) -> String {
        report_file_name(&self.display_name)
    }
}

/// Filesystem store with an id -> upload registry
#[derive(Clone)]
pub struct UploadStore {
    inner: Arc<UploadStoreInner>,
}

struct UploadStoreInner {
    base_path: PathBuf,
    /// `None` keeps uploads for the life of the process
    retention: Option<Duration>,
    uploads: RwLock<HashMap<Uuid, StoredUpload>>,
}

impl UploadStore {
    /// Create a store rooted at `base_path`, creating the directory
    pub async fn open(base_path: impl Into<PathBuf>, retention: Option<Duration>) -> std::io::Result<Self> {
        let base_path = base_path.into();
        tokio::fs::create_dir_all(&base_path).await?;

        Ok(Self {
            inner: Arc::new(UploadStoreInner {
                base_path,
                retention,
                uploads: RwLock::new(HashMap::new()),
            }),
        })
    }

    /// Persist an uploaded source document under a fresh id
    pub async fn save_upload(&self, file_name: &str, data: &[u8]) -> std::io::Result<StoredUpload> {
        if let Some(retention) = self.inner.retention {
            self.evict_older_than(Utc::now() - retention).await;
        }

        let id = Uuid::new_v4();
        let upload = StoredUpload {
            id,
            display_name: display_name(file_name),
            source_path: self.inner.base_path.join(format!("{}.pdf", id)),
            report_path: self.inner.base_path.join(format!("{}{}", id, REPORT_SUFFIX)),
            received_at: Utc::now(),
        };

        tokio::fs::write(&upload.source_path, data).await?;

        tracing::debug!(
            upload_id = %id,
            display_name = %upload.display_name,
            size = data.len(),
            "Upload stored"
        );

        self.inner.uploads.write().await.insert(id, upload.clone());
        Ok(upload)
    }

    /// Write the generated report for an upload
    pub async fn write_report(&self, upload: &StoredUpload, html: &str) -> std::io::Result<()> {
        tokio::fs::write(&upload.report_path, html.as_bytes()).await
    }

    /// Look up an upload by id
    pub async fn get(&self, id: Uuid) -> Option<StoredUpload> {
        self.inner.uploads.read().await.get(&id).cloned()
    }

    /// Drop every upload received before `cutoff`, deleting its files.
    ///
    /// Returns the number of evicted uploads.
    pub async fn evict_older_than(&self, cutoff: DateTime<Utc>) -> usize {
        let expired: Vec<StoredUpload> = {
            let mut uploads = self.inner.uploads.write().await;
            let ids: Vec<Uuid> = uploads
                .values()
                .filter(|u| u.received_at < cutoff)
                .map(|u| u.id)
                .collect();
            ids.iter().filter_map(|id| uploads.remove(id)).collect()
        };

        for upload in &expired {
            for path in [&upload.source_path, &upload.report_path] {
                remove_if_present(path).await;
            }
            tracing::debug!(
                upload_id = %upload.id,
                received_at = %upload.received_at,
                "Evicted expired upload"
            );
        }

        if !expired.is_empty() {
            tracing::info!(evicted = expired.len(), "Expired uploads removed");
        }
        expired.len()
    }

    /// Read a previously written report
    pub async fn read_report(&self, id: Uuid) -> Option<(StoredUpload, Vec<u8>)> {
        let upload = self.get(id).await?;
        match tokio::fs::read(&upload.report_path).await {
            Ok(bytes) => Some((upload, bytes)),
            Err(e) => {
                tracing::debug!(upload_id = %id, "Report not readable: {}", e);
                None
            }
        }
    }
}

async fn remove_if_present(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), "Failed to remove expired file: {}", e),
    }
}

/// Final path component of a client-supplied filename.
///
/// Browsers on Windows may send full paths; both separators are stripped.
pub fn display_name(file_name: &str) -> String {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        "document.pdf".to_string()
    } else {
        name.to_string()
    }
}

/// `book.pdf` -> `book_Report.html`; names without a `.pdf` suffix get the
/// suffix appended.
pub fn report_file_name(display_name: &str) -> String {
    let stem = match display_name.len().checked_sub(4) {
        Some(split)
            if display_name.is_char_boundary(split)
                && display_name[split..].eq_ignore_ascii_case(".pdf") =>
        {
            &display_name[..split]
        }
        _ => display_name,
    };
    format!("{}{}", stem, REPORT_SUFFIX)
}
