use serde::{Deserialize, Serialize};
use crate::reporting::PageSize;

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ScanboardConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "./data/scanboard.db".to_string() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub page_size: ReportPageSize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Vulnerability Scan Report".to_string(),
            page_size: ReportPageSize::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPageSize {
    #[default]
    Letter,
    A4,
}

impl ReportPageSize {
    pub fn dimensions(&self) -> PageSize {
        match self {
            ReportPageSize::Letter => PageSize::LETTER,
            ReportPageSize::A4 => PageSize::A4,
        }
    }
}
