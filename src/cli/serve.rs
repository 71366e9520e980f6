use crate::api;
use crate::cli::commands::ServeArgs;
use crate::cli::resolve_config;
use crate::config::{validate_config, ScanboardConfig};
use crate::errors::ScanboardError;
use tracing::info;

/// Applies `--host`/`--port` and checks the result again.
fn apply_server_flags(
    mut config: ScanboardConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<ScanboardConfig, ScanboardError> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    validate_config(&config)?;
    Ok(config)
}

pub async fn handle_serve(args: ServeArgs) -> Result<(), ScanboardError> {
    let config = resolve_config(args.store.config.as_deref(), args.store.db.as_deref()).await?;
    let config = apply_server_flags(config, args.host, args.port)?;

    info!(host = %config.server.host, port = config.server.port, db = %config.database.path, "Starting API server");

    let state = api::create_app_state(&config)?;
    let app = api::build_app(state, config.server.cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ScanboardError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_flags_override_config() {
        let config = apply_server_flags(ScanboardConfig::default(), Some("127.0.0.1".into()), Some(8080)).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_zero_port_flag_is_rejected() {
        let err = apply_server_flags(ScanboardConfig::default(), None, Some(0)).unwrap_err();
        assert!(matches!(err, ScanboardError::Config(_)));
    }
}
