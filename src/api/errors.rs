use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::ScanboardError;

impl IntoResponse for ScanboardError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ScanboardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ScanboardError::NotFound(_) | ScanboardError::MalformedScanId(_) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

impl From<JsonRejection> for ScanboardError {
    fn from(rejection: JsonRejection) -> Self {
        ScanboardError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    }
}
