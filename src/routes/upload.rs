//! Upload Routes
//!
//! `POST /upload` takes one PDF (multipart field `file`) and answers with
//! the generated report as a download.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::storage::StoredUpload;

/// Header carrying the id under which the report can be fetched again
pub const REPORT_ID_HEADER: &str = "x-report-id";

/// POST /upload
///
/// Missing file or empty filename: redirect back to the form.
pub async fn upload_report(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response> {
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read upload: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read file data: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        file = Some((file_name, data));
        break;
    }

    let Some((file_name, data)) = file.filter(|(name, _)| !name.trim().is_empty()) else {
        tracing::debug!("Upload without a named file, redirecting to form");
        return Ok(Redirect::to("/").into_response());
    };

    let upload = state.store().save_upload(&file_name, &data).await?;

    tracing::info!(
        upload_id = %upload.id,
        file_name = %upload.display_name,
        size = data.len(),
        oracle = state.pipeline().oracle().provider_name(),
        "Upload received, generating report"
    );

    let report = state
        .pipeline()
        .run_file(&upload.source_path, &upload.display_name)
        .await?;

    let html = report.to_html();
    state.store().write_report(&upload, &html).await?;

    tracing::info!(
        upload_id = %upload.id,
        entries = report.entry_count(),
        report = %upload.report_path.display(),
        "Report written"
    );

    Ok(report_download(&upload, html.into_bytes()))
}

/// Report bytes as an attachment named after the original upload
pub fn report_download(upload: &StoredUpload, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&upload.report_name())),
            (header::HeaderName::from_static(REPORT_ID_HEADER), upload.id.to_string()),
        ],
        body,
    )
        .into_response()
}

/// `attachment` disposition with an ASCII fallback name and an RFC 5987
/// `filename*` for the exact UTF-8 name
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(file_name)
    )
}
