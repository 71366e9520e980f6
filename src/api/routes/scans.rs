use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use crate::api::extract::ScanId;
use crate::api::models::{StartScanRequest, StartScanResponse, SuccessResponse};
use crate::api::AppState;
use crate::errors::ScanboardError;
use crate::models::{Scan, ScanDetail};

pub async fn start_scan(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StartScanResponse>, ScanboardError> {
    let Json(body) = body?;
    let req = StartScanRequest::from_json(&body)?;
    let scan_type = req.scan_type.as_deref().unwrap_or("quick");
    let outcome = state.orchestrator.start_scan(&req.target, scan_type).await?;

    Ok(Json(StartScanResponse {
        success: true,
        scan_id: outcome.scan_id,
        vulnerabilities_found: outcome.vulnerabilities_found,
    }))
}

pub async fn list_scans(
    State(state): State<AppState>,
) -> Result<Json<Vec<Scan>>, ScanboardError> {
    Ok(Json(state.db.list_scans()?))
}

pub async fn get_scan(
    State(state): State<AppState>,
    ScanId(id): ScanId,
) -> Result<Json<ScanDetail>, ScanboardError> {
    Ok(Json(state.db.get_scan_detail(id)?))
}

pub async fn delete_scan(
    State(state): State<AppState>,
    ScanId(id): ScanId,
) -> Result<Json<SuccessResponse>, ScanboardError> {
    if state.db.delete_scan(id)? {
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(ScanboardError::NotFound(id))
    }
}
