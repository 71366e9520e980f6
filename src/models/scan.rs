use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::errors::ScanboardError;
use super::finding::FindingCategory;
use super::timestamp;

/// Lifecycle of a scan. `Completed` is the only state with `completed_at` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Pending => "pending",
            ScanStatus::Running => "running",
            ScanStatus::Completed => "completed",
            ScanStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ScanStatus {
    type Err = ScanboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScanStatus::Pending),
            "running" => Ok(ScanStatus::Running),
            "completed" => Ok(ScanStatus::Completed),
            "failed" => Ok(ScanStatus::Failed),
            other => Err(ScanboardError::Database(format!("Unknown scan status: {}", other))),
        }
    }
}

/// Which producer categories a scan runs. Unrecognized names are kept
/// verbatim and select no producers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanType {
    Quick,
    Web,
    Full,
    Other(String),
}

impl ScanType {
    pub fn parse(s: &str) -> Self {
        match s {
            "quick" => ScanType::Quick,
            "web" => ScanType::Web,
            "full" => ScanType::Full,
            other => ScanType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScanType::Quick => "quick",
            ScanType::Web => "web",
            ScanType::Full => "full",
            ScanType::Other(s) => s,
        }
    }

    /// Producer categories in invocation order.
    pub fn categories(&self) -> &'static [FindingCategory] {
        match self {
            ScanType::Quick => &[FindingCategory::Port],
            ScanType::Web => &[FindingCategory::Web, FindingCategory::Tls],
            ScanType::Full => &[FindingCategory::Port, FindingCategory::Web, FindingCategory::Tls],
            ScanType::Other(_) => &[],
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A persisted scan record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scan {
    pub id: i64,
    pub target: String,
    pub scan_type: String,
    pub status: ScanStatus,
    #[serde(serialize_with = "timestamp::serialize")]
    pub started_at: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize_opt")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A persisted finding. `severity` holds the stored label, which rows written
/// outside the orchestrator may not restrict to the five known values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vulnerability {
    pub id: i64,
    #[serde(skip)]
    pub scan_id: i64,
    pub severity: String,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub discovered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanDetail {
    pub scan: Scan,
    pub vulnerabilities: Vec<Vulnerability>,
}
