//! Report download routes

use axum::{
    extract::{Path, State},
    response::Response,
};
use uuid::Uuid;

use super::upload::report_download;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// GET /reports/:id
///
/// Download a report generated earlier in this server run.
pub async fn download_report(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::NotFound(format!("Report {}", id)))?;

    let (upload, body) = state
        .store()
        .read_report(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Report {}", id)))?;

    tracing::debug!(
        upload_id = %id,
        file_name = %upload.display_name,
        received_at = %upload.received_at,
        "Serving stored report"
    );

    Ok(report_download(&upload, body))
}
