use serde::Serialize;
use super::finding::Severity;

/// Per-severity counts over the five recognized labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityDistribution {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub info: u64,
}

impl SeverityDistribution {
    /// Adds `count` to the bucket named by `label`. Returns false and leaves
    /// every bucket untouched for labels outside the known set.
    pub fn record(&mut self, label: &str, count: u64) -> bool {
        match label.parse::<Severity>() {
            Ok(sev) => {
                *self.bucket_mut(sev) += count;
                true
            }
            Err(_) => false,
        }
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
        }
    }

    pub fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low + self.info
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Info => &mut self.info,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_scans: u64,
    pub total_vulnerabilities: u64,
    pub severity_distribution: SeverityDistribution,
}
