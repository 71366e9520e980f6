use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::info;
use crate::api::extract::ScanId;
use crate::api::AppState;
use crate::errors::ScanboardError;
use crate::reporting::{render_scan_report, report_filename};

pub async fn export_report(
    State(state): State<AppState>,
    ScanId(id): ScanId,
) -> Result<impl IntoResponse, ScanboardError> {
    let detail = state.db.get_scan_detail(id)?;
    let report = state.report.clone();

    let bytes = tokio::task::spawn_blocking(move || render_scan_report(&detail, &report))
        .await
        .map_err(|e| ScanboardError::Internal(format!("Report task failed: {}", e)))??;

    info!(scan_id = id, bytes = bytes.len(), "Report exported");

    let disposition = format!("attachment; filename=\"{}\"", report_filename(id));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
