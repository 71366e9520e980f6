use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scanboard", version, about = "Vulnerability scan dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Run a single scan against the local store
    Scan(ScanArgs),
    /// List stored scans, newest first
    List(ListArgs),
    /// Print finding statistics across all scans
    Stats(StoreArgs),
    /// Write a scan's PDF report
    Export(ExportArgs),
    /// Delete a scan and its findings
    Delete(DeleteArgs),
}

/// Where the store lives.
#[derive(Args, Clone, Default)]
pub struct StoreArgs {
    /// YAML configuration file (or set SCANBOARD_CONFIG)
    #[arg(short, long)]
    pub config: Option<String>,

    /// SQLite database path
    #[arg(long)]
    pub db: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Hostname or IP address to assess
    #[arg(short, long)]
    pub target: String,

    /// Scan type: quick, web, full
    #[arg(long = "type", default_value = "quick")]
    pub scan_type: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Scan ID
    pub scan_id: i64,

    /// Output file (defaults to scan_report_<id>.pdf)
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Clone)]
pub struct DeleteArgs {
    /// Scan ID
    pub scan_id: i64,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_command() {
        let cli = Cli::parse_from(["scanboard", "scan", "-t", "example.com", "--type", "full", "--db", "x.db"]);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.target, "example.com");
                assert_eq!(args.scan_type, "full");
                assert_eq!(args.store.db.as_deref(), Some("x.db"));
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_scan_type_defaults_to_quick() {
        let cli = Cli::parse_from(["scanboard", "scan", "--target", "example.com"]);
        match cli.command {
            Commands::Scan(args) => assert_eq!(args.scan_type, "quick"),
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_global_verbosity() {
        let cli = Cli::parse_from(["scanboard", "-vv", "stats"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
