use crate::cli::commands::ExportArgs;
use crate::cli::open_store;
use crate::errors::ScanboardError;
use crate::reporting::{render_scan_report, report_filename};
use tracing::info;

pub async fn handle_export(args: ExportArgs) -> Result<(), ScanboardError> {
    let (config, db) = open_store(&args.store).await?;
    let detail = db.get_scan_detail(args.scan_id)?;

    let bytes = render_scan_report(&detail, &config.report)?;
    let output = args.output.unwrap_or_else(|| report_filename(args.scan_id));
    tokio::fs::write(&output, &bytes).await?;

    info!(scan_id = args.scan_id, path = %output, "Report written");
    println!("Report written to {}", output);
    Ok(())
}
