pub mod layout;
pub mod pdf;

use crate::config::ReportConfig;
use crate::errors::ScanboardError;
use crate::models::ScanDetail;

pub use layout::{build_layout, ReportLayout};
pub use pdf::{render_pdf, PageSize, RenderedPdf};

pub fn report_filename(scan_id: i64) -> String {
    format!("scan_report_{}.pdf", scan_id)
}

/// Renders one scan and its findings as a PDF document. Reads only.
pub fn render_scan_report(detail: &ScanDetail, config: &ReportConfig) -> Result<Vec<u8>, ScanboardError> {
    let layout = build_layout(&config.title, &detail.scan, &detail.vulnerabilities);
    let rendered = render_pdf(&layout, config.page_size.dimensions())?;
    Ok(rendered.bytes)
}
