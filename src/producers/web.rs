//! Web server configuration checks.

use async_trait::async_trait;
use crate::errors::ScanboardError;
use crate::models::{Finding, FindingCategory, Severity};
use super::FindingProducer;

pub struct WebProducer;

#[async_trait]
impl FindingProducer for WebProducer {
    fn category(&self) -> FindingCategory {
        FindingCategory::Web
    }

    fn name(&self) -> &str {
        "web-scan"
    }

    async fn produce(&self, target: &str) -> Result<Vec<Finding>, ScanboardError> {
        Ok(vec![
            Finding::new(
                Severity::Medium,
                "Missing Security Headers",
                format!(
                    "The web server at {} is missing important security headers: X-Frame-Options, X-Content-Type-Options, Content-Security-Policy",
                    target
                ),
                "Configure web server to send security headers. Add X-Frame-Options: DENY, X-Content-Type-Options: nosniff, and implement a Content Security Policy.",
            ),
            Finding::new(
                Severity::Low,
                "Server Version Disclosure",
                "Web server is disclosing version information in HTTP headers, which could help attackers identify known vulnerabilities.",
                "Configure server to hide version information in headers. For Apache, use \"ServerTokens Prod\" directive.",
            ),
            Finding::new(
                Severity::Medium,
                "Directory Listing Enabled",
                "Directory listing is enabled on some directories, exposing file structure.",
                "Disable directory listing in web server configuration. For Apache, use \"Options -Indexes\".",
            ),
            Finding::new(
                Severity::Info,
                "robots.txt Found",
                "robots.txt file exists and may reveal sensitive directories.",
                "Review robots.txt to ensure no sensitive paths are disclosed. Consider using authentication instead of relying on robots.txt.",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_web_findings() {
        let findings = WebProducer.produce("example.com").await.unwrap();
        let titles: Vec<&str> = findings.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Missing Security Headers", "Server Version Disclosure", "Directory Listing Enabled", "robots.txt Found"]
        );
        assert!(findings[0].description.contains("example.com"));
    }
}
