//! Fixed `YYYY-MM-DD HH:MM:SS` rendering used by the API and reports.

use chrono::{DateTime, Utc};
use serde::Serializer;

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(FORMAT).to_string()
}

pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(ts))
}

pub fn serialize_opt<S: Serializer>(
    ts: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => serializer.serialize_str(&format(ts)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_drops_subseconds() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(format(&ts), "2024-03-09 07:05:01");
    }
}
