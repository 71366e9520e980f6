//! Port and service exposure checks.

use async_trait::async_trait;
use crate::errors::ScanboardError;
use crate::models::{Finding, FindingCategory, Severity};
use super::FindingProducer;

/// One open port with the service detected on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceObservation {
    pub port: u16,
    pub service: &'static str,
    pub product: &'static str,
    pub version: &'static str,
}

/// Services reported for every target in place of a live port scan.
pub const SIMULATED_SERVICES: &[ServiceObservation] = &[
    ServiceObservation { port: 22, service: "SSH", product: "OpenSSH", version: "7.4" },
    ServiceObservation { port: 80, service: "HTTP", product: "Apache", version: "2.4.6" },
    ServiceObservation { port: 443, service: "HTTPS", product: "Apache", version: "2.4.6" },
    ServiceObservation { port: 3306, service: "MySQL", product: "MySQL", version: "5.7.33" },
];

/// Product releases known to be behind the supported line, with the upgrade advice.
const OUTDATED: &[(&str, &str, &str)] = &[
    ("Apache", "2.4.6", "Update to the latest stable version of Apache web server"),
];

const DATABASE_PORTS: &[u16] = &[3306];
const TLS_PORTS: &[u16] = &[443];

pub struct PortProducer;

#[async_trait]
impl FindingProducer for PortProducer {
    fn category(&self) -> FindingCategory {
        FindingCategory::Port
    }

    fn name(&self) -> &str {
        "port-scan"
    }

    async fn produce(&self, target: &str) -> Result<Vec<Finding>, ScanboardError> {
        Ok(assess_services(target, SIMULATED_SERVICES))
    }
}

/// Turns observed services into findings. An outdated release is reported once
/// for all ports running it, at the position of its first port.
pub fn assess_services(target: &str, services: &[ServiceObservation]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut reported: Vec<(&str, &str)> = Vec::new();

    for svc in services {
        if let Some((_, _, advice)) = OUTDATED
            .iter()
            .find(|(product, version, _)| *product == svc.product && *version == svc.version)
        {
            if !reported.contains(&(svc.product, svc.version)) {
                reported.push((svc.product, svc.version));
                let ports: Vec<String> = services
                    .iter()
                    .filter(|s| s.product == svc.product && s.version == svc.version)
                    .map(|s| s.port.to_string())
                    .collect();
                let label = if ports.len() == 1 { "Port" } else { "Ports" };
                findings.push(Finding::new(
                    Severity::Medium,
                    format!("Outdated {} Version Detected", svc.product),
                    format!(
                        "{} {} on {}: {} version {} is outdated and may contain known vulnerabilities.",
                        label,
                        ports.join(", "),
                        target,
                        svc.product,
                        svc.version
                    ),
                    *advice,
                ));
            }
        }

        if DATABASE_PORTS.contains(&svc.port) {
            findings.push(Finding::new(
                Severity::High,
                format!("{} Database Publicly Accessible", svc.service),
                format!(
                    "{} database on {} (port {}) is accessible from external networks.",
                    svc.service, target, svc.port
                ),
                format!(
                    "Restrict {} access to localhost or trusted IP addresses only. Use firewall rules to block external access.",
                    svc.service
                ),
            ));
        }
    }

    if services.iter().any(|s| TLS_PORTS.contains(&s.port)) {
        findings.push(Finding::new(
            Severity::Info,
            "SSL/TLS Certificate Detected",
            format!("HTTPS service on {} is using SSL/TLS encryption.", target),
            "Ensure certificate is valid and not expired. Consider using strong cipher suites.",
        ));
    }

    findings
}
