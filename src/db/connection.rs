use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use crate::errors::ScanboardError;

/// Shared handle to the scan store. Cloning shares the same connection; every
/// mutation runs under its lock, so writers are serialized.
pub struct Database {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(path: &str) -> Result<Self, ScanboardError> {
        // Ensure parent directory exists
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| ScanboardError::Database(format!("Failed to open database: {}", e)))?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| ScanboardError::Database(format!("Failed to set pragmas: {}", e)))?;

        let db = Self { conn: Arc::new(Mutex::new(conn)) };
        db.initialize()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Self, ScanboardError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ScanboardError::Database(format!("Failed to open in-memory db: {}", e)))?;
        let db = Self { conn: Arc::new(Mutex::new(conn)) };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> Result<(), ScanboardError> {
        let conn = self.lock()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(|e| ScanboardError::Database(format!("Failed to set pragmas: {}", e)))?;
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| ScanboardError::Database(format!("Failed to create tables: {}", e)))?;
        Ok(())
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>, ScanboardError> {
        self.conn
            .lock()
            .map_err(|_| ScanboardError::Database("Connection lock poisoned".into()))
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self { conn: self.conn.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::in_memory().unwrap();
        let conn = db.lock().unwrap();
        let enabled: i64 = conn.query_row("PRAGMA foreign_keys", [], |r| r.get(0)).unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_on_disk_database_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scanboard.db");
        let db = Database::new(path.to_str().unwrap()).unwrap();
        assert!(path.exists());
        drop(db);

        // Reopening keeps the existing schema
        let db = Database::new(path.to_str().unwrap()).unwrap();
        assert!(db.list_scans().unwrap().is_empty());
    }
}
