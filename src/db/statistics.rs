use crate::errors::ScanboardError;
use crate::models::{SeverityDistribution, Statistics};
use super::Database;

impl Database {
    /// Totals across every stored scan. Severity labels outside the known set
    /// count toward `total_vulnerabilities` but no bucket.
    pub fn statistics(&self) -> Result<Statistics, ScanboardError> {
        let conn = self.lock()?;

        let total_scans: i64 = conn.query_row("SELECT COUNT(*) FROM scans", [], |row| row.get(0))
            .map_err(|e| ScanboardError::Database(format!("Query error: {}", e)))?;
        let total_vulnerabilities: i64 = conn.query_row("SELECT COUNT(*) FROM vulnerabilities", [], |row| row.get(0))
            .map_err(|e| ScanboardError::Database(format!("Query error: {}", e)))?;

        let mut stmt = conn.prepare("SELECT severity, COUNT(*) FROM vulnerabilities GROUP BY severity")
            .map_err(|e| ScanboardError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
            .map_err(|e| ScanboardError::Database(format!("Query error: {}", e)))?;

        let mut severity_distribution = SeverityDistribution::default();
        for row in rows {
            let (label, count) = row.map_err(|e| ScanboardError::Database(format!("Row error: {}", e)))?;
            severity_distribution.record(&label, count as u64);
        }

        Ok(Statistics {
            total_scans: total_scans as u64,
            total_vulnerabilities: total_vulnerabilities as u64,
            severity_distribution,
        })
    }
}
