use chrono::{DateTime, Utc};
use rusqlite::Connection;
use crate::errors::ScanboardError;
use crate::models::{Finding, Vulnerability};
use super::Database;

fn vulnerability_from_row(row: &rusqlite::Row) -> rusqlite::Result<Vulnerability> {
    Ok(Vulnerability {
        id: row.get(0)?,
        scan_id: row.get(1)?,
        severity: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        recommendation: row.get(5)?,
        discovered_at: row.get::<_, DateTime<Utc>>(6)?,
    })
}

/// Findings of one scan in insertion order.
pub(crate) fn vulnerabilities_for(conn: &Connection, scan_id: i64) -> Result<Vec<Vulnerability>, ScanboardError> {
    let mut stmt = conn.prepare(
        "SELECT id, scan_id, severity, title, description, recommendation, discovered_at FROM vulnerabilities WHERE scan_id = ?1 ORDER BY id ASC"
    ).map_err(|e| ScanboardError::Database(format!("Query failed: {}", e)))?;

    let rows = stmt.query_map(rusqlite::params![scan_id], vulnerability_from_row)
        .map_err(|e| ScanboardError::Database(format!("Query error: {}", e)))?;

    let mut vulnerabilities = Vec::new();
    for row in rows {
        vulnerabilities.push(row.map_err(|e| ScanboardError::Database(format!("Row error: {}", e)))?);
    }
    Ok(vulnerabilities)
}

impl Database {
    /// Attaches a single finding to an existing scan.
    pub fn insert_vulnerability(&self, scan_id: i64, finding: &Finding) -> Result<Vulnerability, ScanboardError> {
        let conn = self.lock()?;
        if super::scans::find_scan(&conn, scan_id)?.is_none() {
            return Err(ScanboardError::NotFound(scan_id));
        }

        let discovered_at = Utc::now();
        conn.execute(
            "INSERT INTO vulnerabilities (scan_id, severity, title, description, recommendation, discovered_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                scan_id,
                finding.severity.as_str(),
                finding.title,
                finding.description,
                finding.recommendation,
                discovered_at,
            ],
        ).map_err(|e| ScanboardError::Database(format!("Failed to insert vulnerability: {}", e)))?;

        Ok(Vulnerability {
            id: conn.last_insert_rowid(),
            scan_id,
            severity: finding.severity.as_str().to_string(),
            title: finding.title.clone(),
            description: finding.description.clone(),
            recommendation: finding.recommendation.clone(),
            discovered_at,
        })
    }

    pub fn get_vulnerabilities(&self, scan_id: i64) -> Result<Vec<Vulnerability>, ScanboardError> {
        let conn = self.lock()?;
        vulnerabilities_for(&conn, scan_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScanStatus, Severity};

    #[test]
    fn test_db_insert_and_get_vulnerabilities() {
        let db = Database::in_memory().unwrap();
        let scan = db.create_scan("example.com", "web", ScanStatus::Running).unwrap();

        let stored = db.insert_vulnerability(
            scan.id,
            &Finding::new(Severity::Low, "Server Version Disclosure", "desc", "rec"),
        ).unwrap();
        assert_eq!(stored.scan_id, scan.id);

        let results = db.get_vulnerabilities(scan.id).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0], stored);
    }

    #[test]
    fn test_db_insert_vulnerability_requires_scan() {
        let db = Database::in_memory().unwrap();
        let err = db.insert_vulnerability(5, &Finding::new(Severity::Info, "t", "d", "r")).unwrap_err();
        assert!(matches!(err, ScanboardError::NotFound(5)));
    }

    #[test]
    fn test_db_orphan_rejected_by_foreign_key() {
        let db = Database::in_memory().unwrap();
        let conn = db.lock().unwrap();
        let result = conn.execute(
            "INSERT INTO vulnerabilities (scan_id, severity, title, discovered_at) VALUES (99, 'info', 't', '2024-01-01 00:00:00+00:00')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_db_get_vulnerabilities_empty_scan() {
        let db = Database::in_memory().unwrap();
        let scan = db.create_scan("example.com", "quick", ScanStatus::Running).unwrap();
        assert!(db.get_vulnerabilities(scan.id).unwrap().is_empty());
    }
}
