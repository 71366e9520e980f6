use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension};
use crate::errors::ScanboardError;
use crate::models::{Finding, Scan, ScanDetail, ScanStatus};
use super::Database;

const SCAN_COLUMNS: &str = "id, target, scan_type, status, started_at, completed_at";

pub(crate) fn scan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Scan> {
    let status: String = row.get(3)?;
    let status = status
        .parse::<ScanStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    Ok(Scan {
        id: row.get(0)?,
        target: row.get(1)?,
        scan_type: row.get(2)?,
        status,
        started_at: row.get::<_, DateTime<Utc>>(4)?,
        completed_at: row.get::<_, Option<DateTime<Utc>>>(5)?,
    })
}

pub(crate) fn find_scan(conn: &Connection, id: i64) -> Result<Option<Scan>, ScanboardError> {
    conn.query_row(
        &format!("SELECT {} FROM scans WHERE id = ?1", SCAN_COLUMNS),
        rusqlite::params![id],
        scan_from_row,
    )
    .optional()
    .map_err(|e| ScanboardError::Database(format!("Query error: {}", e)))
}

impl Database {
    pub fn create_scan(
        &self,
        target: &str,
        scan_type: &str,
        status: ScanStatus,
    ) -> Result<Scan, ScanboardError> {
        let conn = self.lock()?;
        let started_at = Utc::now();
        conn.execute(
            "INSERT INTO scans (target, scan_type, status, started_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![target, scan_type, status.as_str(), started_at],
        ).map_err(|e| ScanboardError::Database(format!("Failed to create scan: {}", e)))?;

        Ok(Scan {
            id: conn.last_insert_rowid(),
            target: target.to_string(),
            scan_type: scan_type.to_string(),
            status,
            started_at,
            completed_at: None,
        })
    }

    pub fn get_scan(&self, id: i64) -> Result<Option<Scan>, ScanboardError> {
        let conn = self.lock()?;
        find_scan(&conn, id)
    }

    /// One scan and its findings, read under a single lock so a concurrent
    /// delete is observed either entirely or not at all.
    pub fn get_scan_detail(&self, id: i64) -> Result<ScanDetail, ScanboardError> {
        let conn = self.lock()?;
        let scan = find_scan(&conn, id)?.ok_or(ScanboardError::NotFound(id))?;
        let vulnerabilities = super::vulnerabilities::vulnerabilities_for(&conn, id)?;
        Ok(ScanDetail { scan, vulnerabilities })
    }

    /// All scans, most recently started first.
    pub fn list_scans(&self) -> Result<Vec<Scan>, ScanboardError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            &format!("SELECT {} FROM scans ORDER BY started_at DESC, id DESC", SCAN_COLUMNS)
        ).map_err(|e| ScanboardError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], scan_from_row)
            .map_err(|e| ScanboardError::Database(format!("Query error: {}", e)))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| ScanboardError::Database(format!("Row error: {}", e)))?);
        }
        Ok(results)
    }

    /// Records the findings and marks the scan completed in one transaction.
    /// Nothing is written if any step fails.
    pub fn complete_scan(&self, id: i64, findings: &[Finding]) -> Result<usize, ScanboardError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()
            .map_err(|e| ScanboardError::Database(format!("Failed to begin transaction: {}", e)))?;
        let now = Utc::now();

        let updated = tx.execute(
            "UPDATE scans SET status = 'completed', completed_at = ?2 WHERE id = ?1",
            rusqlite::params![id, now],
        ).map_err(|e| ScanboardError::Database(format!("Update failed: {}", e)))?;
        if updated == 0 {
            return Err(ScanboardError::NotFound(id));
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO vulnerabilities (scan_id, severity, title, description, recommendation, discovered_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
            ).map_err(|e| ScanboardError::Database(format!("Failed to insert vulnerability: {}", e)))?;
            for finding in findings {
                stmt.execute(rusqlite::params![
                    id,
                    finding.severity.as_str(),
                    finding.title,
                    finding.description,
                    finding.recommendation,
                    now,
                ]).map_err(|e| ScanboardError::Database(format!("Failed to insert vulnerability: {}", e)))?;
            }
        }

        tx.commit()
            .map_err(|e| ScanboardError::Database(format!("Commit failed: {}", e)))?;
        Ok(findings.len())
    }

    /// Status-only write; any findings gathered for the scan are not stored.
    pub fn mark_scan_failed(&self, id: i64) -> Result<(), ScanboardError> {
        let conn = self.lock()?;
        let updated = conn.execute(
            "UPDATE scans SET status = 'failed', completed_at = NULL WHERE id = ?1",
            rusqlite::params![id],
        ).map_err(|e| ScanboardError::Database(format!("Update failed: {}", e)))?;
        if updated == 0 {
            return Err(ScanboardError::NotFound(id));
        }
        Ok(())
    }

    /// Deletes the scan and every vulnerability it owns atomically.
    /// Returns false when no such scan exists.
    pub fn delete_scan(&self, id: i64) -> Result<bool, ScanboardError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()
            .map_err(|e| ScanboardError::Database(format!("Failed to begin transaction: {}", e)))?;

        tx.execute("DELETE FROM vulnerabilities WHERE scan_id = ?1", rusqlite::params![id])
            .map_err(|e| ScanboardError::Database(format!("Delete failed: {}", e)))?;
        let affected = tx.execute("DELETE FROM scans WHERE id = ?1", rusqlite::params![id])
            .map_err(|e| ScanboardError::Database(format!("Delete failed: {}", e)))?;

        tx.commit()
            .map_err(|e| ScanboardError::Database(format!("Commit failed: {}", e)))?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn sample_findings() -> Vec<Finding> {
        vec![
            Finding::new(Severity::Medium, "Outdated server", "d1", "r1"),
            Finding::new(Severity::High, "Exposed database", "d2", "r2"),
        ]
    }

    #[test]
    fn test_db_create_and_get_scan() {
        let db = Database::in_memory().unwrap();
        let created = db.create_scan("example.com", "quick", ScanStatus::Running).unwrap();
        assert_eq!(created.id, 1);

        let scan = db.get_scan(created.id).unwrap().unwrap();
        assert_eq!(scan.target, "example.com");
        assert_eq!(scan.scan_type, "quick");
        assert_eq!(scan.status, ScanStatus::Running);
        assert!(scan.completed_at.is_none());
    }

    #[test]
    fn test_db_get_nonexistent_scan() {
        let db = Database::in_memory().unwrap();
        assert!(db.get_scan(42).unwrap().is_none());
        assert!(matches!(db.get_scan_detail(42), Err(ScanboardError::NotFound(42))));
    }

    #[test]
    fn test_db_list_scans_newest_first() {
        let db = Database::in_memory().unwrap();
        for target in ["a.com", "b.com", "c.com"] {
            db.create_scan(target, "quick", ScanStatus::Running).unwrap();
        }

        let targets: Vec<String> = db.list_scans().unwrap().into_iter().map(|s| s.target).collect();
        assert_eq!(targets, vec!["c.com", "b.com", "a.com"]);
    }

    #[test]
    fn test_db_complete_scan_sets_status_and_findings() {
        let db = Database::in_memory().unwrap();
        let scan = db.create_scan("example.com", "quick", ScanStatus::Running).unwrap();

        let stored = db.complete_scan(scan.id, &sample_findings()).unwrap();
        assert_eq!(stored, 2);

        let detail = db.get_scan_detail(scan.id).unwrap();
        assert_eq!(detail.scan.status, ScanStatus::Completed);
        assert!(detail.scan.completed_at.is_some());
        let titles: Vec<&str> = detail.vulnerabilities.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Outdated server", "Exposed database"]);
        assert_eq!(detail.vulnerabilities[1].severity, "high");
    }

    #[test]
    fn test_db_complete_missing_scan_writes_nothing() {
        let db = Database::in_memory().unwrap();
        let err = db.complete_scan(9, &sample_findings()).unwrap_err();
        assert!(matches!(err, ScanboardError::NotFound(9)));
        assert_eq!(db.statistics().unwrap().total_vulnerabilities, 0);
    }

    #[test]
    fn test_db_mark_scan_failed() {
        let db = Database::in_memory().unwrap();
        let scan = db.create_scan("example.com", "full", ScanStatus::Running).unwrap();
        db.mark_scan_failed(scan.id).unwrap();

        let scan = db.get_scan(scan.id).unwrap().unwrap();
        assert_eq!(scan.status, ScanStatus::Failed);
        assert!(scan.completed_at.is_none());
    }

    #[test]
    fn test_db_delete_scan_cascades() {
        let db = Database::in_memory().unwrap();
        let keep = db.create_scan("keep.com", "quick", ScanStatus::Running).unwrap();
        let gone = db.create_scan("gone.com", "quick", ScanStatus::Running).unwrap();
        db.complete_scan(keep.id, &sample_findings()).unwrap();
        db.complete_scan(gone.id, &sample_findings()).unwrap();

        assert!(db.delete_scan(gone.id).unwrap());
        assert!(db.get_scan(gone.id).unwrap().is_none());
        assert!(db.get_vulnerabilities(gone.id).unwrap().is_empty());
        assert_eq!(db.get_vulnerabilities(keep.id).unwrap().len(), 2);
    }

    #[test]
    fn test_db_delete_nonexistent() {
        let db = Database::in_memory().unwrap();
        assert!(!db.delete_scan(3).unwrap());
    }

    #[test]
    fn test_db_ids_not_reused_after_delete() {
        let db = Database::in_memory().unwrap();
        let first = db.create_scan("a.com", "quick", ScanStatus::Running).unwrap();
        db.delete_scan(first.id).unwrap();
        let second = db.create_scan("b.com", "quick", ScanStatus::Running).unwrap();
        assert!(second.id > first.id);
    }
}
