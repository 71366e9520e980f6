use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use crate::errors::ScanboardError;

/// The `:id` segment of a scan route. Anything that does not parse as an
/// integer is rejected as an unknown scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ScanId
where
    S: Send + Sync,
{
    type Rejection = ScanboardError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ScanboardError::MalformedScanId(e.body_text()))?;

        raw.parse::<i64>()
            .map(ScanId)
            .map_err(|_| ScanboardError::MalformedScanId(raw))
    }
}
