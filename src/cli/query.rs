use crate::cli::commands::{ListArgs, StoreArgs};
use crate::cli::open_store;
use crate::errors::ScanboardError;
use crate::models::{timestamp, Severity};

pub async fn handle_list(args: ListArgs) -> Result<(), ScanboardError> {
    let (_, db) = open_store(&args.store).await?;
    let scans = db.list_scans()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scans)?);
        return Ok(());
    }

    if scans.is_empty() {
        println!("No scans recorded");
        return Ok(());
    }

    println!("{:>5}  {:<30} {:<8} {:<10} {}", "ID", "TARGET", "TYPE", "STATUS", "STARTED");
    for scan in &scans {
        println!(
            "{:>5}  {:<30} {:<8} {:<10} {}",
            scan.id,
            scan.target,
            scan.scan_type,
            scan.status,
            timestamp::format(&scan.started_at)
        );
    }
    Ok(())
}

pub async fn handle_stats(args: StoreArgs) -> Result<(), ScanboardError> {
    let (_, db) = open_store(&args).await?;
    let stats = db.statistics()?;

    println!("Scans:           {}", stats.total_scans);
    println!("Vulnerabilities: {}", stats.total_vulnerabilities);
    for severity in Severity::ALL {
        println!("  {:<9} {}", severity, stats.severity_distribution.get(severity));
    }
    Ok(())
}
