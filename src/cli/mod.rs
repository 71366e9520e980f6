pub mod commands;
pub mod delete;
pub mod export;
pub mod query;
pub mod scan;
pub mod serve;

pub use commands::{Cli, Commands};

use crate::config::{load_config, validate_config, ScanboardConfig};
use crate::db::Database;
use crate::errors::ScanboardError;

/// Loads configuration and applies a `--db` override.
pub async fn resolve_config(config: Option<&str>, db: Option<&str>) -> Result<ScanboardConfig, ScanboardError> {
    let mut config = load_config(config).await?;
    if let Some(db) = db {
        config.database.path = db.to_string();
        validate_config(&config)?;
    }
    Ok(config)
}


pub async fn open_store(args: &commands::StoreArgs) -> Result<(ScanboardConfig, Database), ScanboardError> {
    let config = resolve_config(args.config.as_deref(), args.db.as_deref()).await?;
    let db = Database::new(&config.database.path)?;
    Ok((config, db))
}
