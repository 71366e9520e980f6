use serde::Serialize;
use tracing::{error, info};
use crate::db::Database;
use crate::errors::ScanboardError;
use crate::models::{ScanStatus, ScanType};
use crate::producers::ProducerRegistry;
use super::target::validate_target;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub scan_id: i64,
    pub vulnerabilities_found: usize,
}

/// Runs a scan end to end: validate, record, produce, persist.
///
/// Findings are gathered in memory and written together with the
/// `completed` status in one transaction. If that write fails the scan is
/// marked `failed` on its own and no findings are kept.
#[derive(Clone)]
pub struct ScanOrchestrator {
    db: Database,
    producers: ProducerRegistry,
}

impl ScanOrchestrator {
    pub fn new(db: Database, producers: ProducerRegistry) -> Self {
        Self { db, producers }
    }

    pub async fn start_scan(&self, target: &str, scan_type: &str) -> Result<ScanOutcome, ScanboardError> {
        let target = validate_target(target)?;
        let kind = ScanType::parse(scan_type);

        let scan = self.db.create_scan(target, kind.as_str(), ScanStatus::Running)?;
        info!(scan_id = scan.id, host = %target, scan_type = %kind, "Scan started");

        let findings = self.producers.collect(target, kind.categories()).await;

        match self.db.complete_scan(scan.id, &findings) {
            Ok(count) => {
                info!(scan_id = scan.id, findings = count, "Scan completed");
                Ok(ScanOutcome { scan_id: scan.id, vulnerabilities_found: count })
            }
            Err(e) => {
                error!(scan_id = scan.id, error = %e, "Scan failed");
                if let Err(mark_err) = self.db.mark_scan_failed(scan.id) {
                    error!(scan_id = scan.id, error = %mark_err, "Could not mark scan as failed");
                }
                Err(ScanboardError::Orchestration(e.to_string()))
            }
        }
    }
}
