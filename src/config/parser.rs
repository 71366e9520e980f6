use std::path::Path;
use crate::errors::ScanboardError;
use super::types::ScanboardConfig;
use tracing::debug;

/// Names a config file when no `--config` flag is given.
pub const CONFIG_ENV: &str = "SCANBOARD_CONFIG";

pub async fn parse_config(path: &Path) -> Result<ScanboardConfig, ScanboardError> {
    if !path.exists() {
        return Err(ScanboardError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ScanboardError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: ScanboardConfig = if content.trim().is_empty() {
        ScanboardConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;
    Ok(config)
}

/// Config from `explicit`, else from `$SCANBOARD_CONFIG`, else defaults.
pub async fn load_config(explicit: Option<&str>) -> Result<ScanboardConfig, ScanboardError> {
    let path = explicit
        .map(str::to_string)
        .or_else(|| std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty()));

    match path {
        Some(path) => {
            debug!(path = %path, "Loading configuration");
            parse_config(Path::new(&path)).await
        }
        None => Ok(ScanboardConfig::default()),
    }
}

/// Semantic checks, rerun whenever CLI flags change a loaded config.
pub fn validate_config(config: &ScanboardConfig) -> Result<(), ScanboardError> {
    if config.server.port == 0 {
        return Err(ScanboardError::Config("server.port must be non-zero".into()));
    }
    if config.database.path.trim().is_empty() {
        return Err(ScanboardError::Config("database.path must not be empty".into()));
    }
    Ok(())
}
