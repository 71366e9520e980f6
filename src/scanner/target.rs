use std::sync::LazyLock;

use regex::Regex;
use crate::errors::ScanboardError;

/// Hostnames and IP addresses only: no scheme, port, path or query.
static TARGET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.-]+$").expect("valid target pattern")
});

/// Trims `raw` and checks it against the hostname/IP character class.
pub fn validate_target(raw: &str) -> Result<&str, ScanboardError> {
    let target = raw.trim();
    if target.is_empty() {
        return Err(ScanboardError::InvalidInput("Target is required".into()));
    }
    if !TARGET_PATTERN.is_match(target) {
        return Err(ScanboardError::InvalidInput("Invalid target format".into()));
    }
    Ok(target)
}
