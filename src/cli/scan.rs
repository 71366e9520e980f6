use crate::cli::commands::ScanArgs;
use crate::cli::open_store;
use crate::errors::ScanboardError;
use crate::producers::ProducerRegistry;
use crate::scanner::ScanOrchestrator;

pub async fn handle_scan(args: ScanArgs) -> Result<(), ScanboardError> {
    let (_, db) = open_store(&args.store).await?;
    let orchestrator = ScanOrchestrator::new(db.clone(), ProducerRegistry::builtin());

    let outcome = orchestrator.start_scan(&args.target, &args.scan_type).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let detail = db.get_scan_detail(outcome.scan_id)?;
    println!("Scan {} on {} ({}): {}", detail.scan.id, detail.scan.target, detail.scan.scan_type, detail.scan.status);
    println!("Findings: {}", outcome.vulnerabilities_found);
    for (i, vuln) in detail.vulnerabilities.iter().enumerate() {
        println!("  {:>2}. [{}] {}", i + 1, vuln.severity.to_uppercase(), vuln.title);
    }
    Ok(())
}
