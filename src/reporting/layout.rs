//! Report structure, independent of the output format.

use crate::models::{timestamp, Scan, Vulnerability};

pub const SUMMARY_COLUMN_WIDTHS: [f32; 2] = [150.0, 300.0];
pub const FINDING_COLUMN_WIDTH: f32 = 450.0;
pub const BLOCK_SPACING: f32 = 12.0;
pub const FINDINGS_HEADING: &str = "Discovered Vulnerabilities";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Key/value rows; the label column is shaded
    Summary,
    /// One finding; the header row is shaded and bold
    Finding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub kind: TableKind,
    pub column_widths: Vec<f32>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    Spacer(f32),
    Table(Table),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl ReportLayout {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }
}

/// Lays out the title, the summary table and one block per finding, numbered
/// from 1 in the order given.
pub fn build_layout(title: &str, scan: &Scan, vulnerabilities: &[Vulnerability]) -> ReportLayout {
    let mut blocks = vec![
        Block::Title(title.to_string()),
        Block::Spacer(12.0),
        Block::Table(summary_table(scan, vulnerabilities.len())),
    ];

    if !vulnerabilities.is_empty() {
        blocks.push(Block::Spacer(20.0));
        blocks.push(Block::Heading(FINDINGS_HEADING.to_string()));
        blocks.push(Block::Spacer(BLOCK_SPACING));
        for (i, vuln) in vulnerabilities.iter().enumerate() {
            blocks.push(Block::Table(finding_table(i + 1, vuln)));
            blocks.push(Block::Spacer(BLOCK_SPACING));
        }
    }

    ReportLayout { title: title.to_string(), blocks }
}

fn summary_table(scan: &Scan, total: usize) -> Table {
    let completed = scan
        .completed_at
        .as_ref()
        .map(timestamp::format)
        .unwrap_or_else(|| "N/A".to_string());

    let rows = [
        ("Target:", scan.target.clone()),
        ("Scan Type:", scan.scan_type.clone()),
        ("Started:", timestamp::format(&scan.started_at)),
        ("Completed:", completed),
        ("Total Vulnerabilities:", total.to_string()),
    ];

    Table {
        kind: TableKind::Summary,
        column_widths: SUMMARY_COLUMN_WIDTHS.to_vec(),
        rows: rows.into_iter().map(|(k, v)| vec![k.to_string(), v]).collect(),
    }
}

fn finding_table(number: usize, vuln: &Vulnerability) -> Table {
    Table {
        kind: TableKind::Finding,
        column_widths: vec![FINDING_COLUMN_WIDTH],
        rows: vec![
            vec![format!("#{} - {}", number, vuln.title)],
            vec![format!("Severity: {}", vuln.severity.to_uppercase())],
            vec![format!("Description: {}", vuln.description)],
            vec![format!("Recommendation: {}", vuln.recommendation)],
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanStatus;
    use chrono::{TimeZone, Utc};

    fn scan(completed: bool) -> Scan {
        let started = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Scan {
            id: 3,
            target: "example.com".into(),
            scan_type: "web".into(),
            status: if completed { ScanStatus::Completed } else { ScanStatus::Failed },
            started_at: started,
            completed_at: completed.then(|| started + chrono::Duration::seconds(2)),
        }
    }

    fn vuln(title: &str, severity: &str) -> Vulnerability {
        Vulnerability {
            id: 1,
            scan_id: 3,
            severity: severity.into(),
            title: title.into(),
            description: "desc".into(),
            recommendation: "rec".into(),
            discovered_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 2).unwrap(),
        }
    }

    #[test]
    fn test_zero_findings_has_summary_only() {
        let layout = build_layout("Vulnerability Scan Report", &scan(true), &[]);
        let tables: Vec<&Table> = layout.tables().collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].kind, TableKind::Summary);
        assert_eq!(tables[0].rows[4], vec!["Total Vulnerabilities:", "0"]);
        assert!(!layout.blocks.iter().any(|b| matches!(b, Block::Heading(_))));
    }

    #[test]
    fn test_summary_rows() {
        let layout = build_layout("Report", &scan(true), &[]);
        let summary = layout.tables().next().unwrap();
        assert_eq!(summary.rows[0], vec!["Target:", "example.com"]);
        assert_eq!(summary.rows[1], vec!["Scan Type:", "web"]);
        assert_eq!(summary.rows[2], vec!["Started:", "2024-05-01 10:00:00"]);
        assert_eq!(summary.rows[3], vec!["Completed:", "2024-05-01 10:00:02"]);
    }

    #[test]
    fn test_incomplete_scan_shows_na() {
        let layout = build_layout("Report", &scan(false), &[]);
        let summary = layout.tables().next().unwrap();
        assert_eq!(summary.rows[3], vec!["Completed:", "N/A"]);
    }

    #[test]
    fn test_finding_blocks_numbered_with_uppercase_severity() {
        let vulns = [vuln("First", "medium"), vuln("Second", "info")];
        let layout = build_layout("Report", &scan(true), &vulns);
        let findings: Vec<&Table> = layout.tables().filter(|t| t.kind == TableKind::Finding).collect();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].rows[0], vec!["#1 - First"]);
        assert_eq!(findings[0].rows[1], vec!["Severity: MEDIUM"]);
        assert_eq!(findings[1].rows[0], vec!["#2 - Second"]);
        assert_eq!(findings[1].rows[3], vec!["Recommendation: rec"]);
    }

    #[test]
    fn test_finding_blocks_separated_by_spacing() {
        let vulns = [vuln("A", "low"), vuln("B", "low")];
        let layout = build_layout("Report", &scan(true), &vulns);
        let last_two = &layout.blocks[layout.blocks.len() - 2..];
        assert!(matches!(last_two[0], Block::Table(_)));
        assert_eq!(last_two[1], Block::Spacer(BLOCK_SPACING));
    }
}
