use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected before any record is written.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Scan not found")]
    NotFound(i64),

    /// A scan id segment that is not an integer; no such scan can exist.
    #[error("Scan not found")]
    MalformedScanId(String),

    #[error("Scan failed: {0}")]
    Orchestration(String),

    #[error("Producer error: {0}")]
    Producer(String),

    #[error("Report rendering failed: {0}")]
    Render(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
