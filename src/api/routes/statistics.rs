use axum::{extract::State, Json};
use crate::api::AppState;
use crate::errors::ScanboardError;
use crate::models::Statistics;

pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<Statistics>, ScanboardError> {
    Ok(Json(state.db.statistics()?))
}
