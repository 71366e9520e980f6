pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;

use std::sync::Arc;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::{ReportConfig, ScanboardConfig};
use crate::db::Database;
use crate::errors::ScanboardError;
use crate::producers::ProducerRegistry;
use crate::scanner::ScanOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub orchestrator: Arc<ScanOrchestrator>,
    pub report: ReportConfig,
}

impl AppState {
    pub fn new(db: Database, producers: ProducerRegistry, report: ReportConfig) -> Self {
        let orchestrator = Arc::new(ScanOrchestrator::new(db.clone(), producers));
        Self { db, orchestrator, report }
    }
}

/// Opens the store named in `config` (creating the schema if needed) and
/// wires the built-in producers.
pub fn create_app_state(config: &ScanboardConfig) -> Result<AppState, ScanboardError> {
    let db = Database::new(&config.database.path)?;
    Ok(AppState::new(db, ProducerRegistry::builtin(), config.report.clone()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(routes::dashboard::index))
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/scan", axum::routing::post(routes::scans::start_scan))
        .route("/api/scans", axum::routing::get(routes::scans::list_scans))
        .route("/api/scan/:id", axum::routing::get(routes::scans::get_scan))
        .route("/api/scan/:id/delete", axum::routing::delete(routes::scans::delete_scan))
        .route("/api/scan/:id/export", axum::routing::get(routes::reports::export_report))
        .route("/api/statistics", axum::routing::get(routes::statistics::get_statistics))
        .with_state(state)
}

/// `build_router` plus request tracing and, when enabled, permissive CORS.
pub fn build_app(state: AppState, cors: bool) -> Router {
    let router = build_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
