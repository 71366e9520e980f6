use clap::Parser;
use scanboard::{cli, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Scan(args) => cli::scan::handle_scan(args).await,
        cli::Commands::List(args) => cli::query::handle_list(args).await,
        cli::Commands::Stats(args) => cli::query::handle_stats(args).await,
        cli::Commands::Export(args) => cli::export::handle_export(args).await,
        cli::Commands::Delete(args) => cli::delete::handle_delete(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            errors::ScanboardError::Config(_) => 2,
            errors::ScanboardError::NotFound(_) | errors::ScanboardError::MalformedScanId(_) => 4,
            errors::ScanboardError::InvalidInput(_) => 5,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}
