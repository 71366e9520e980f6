use serde::Serialize;
use serde_json::Value;
use crate::errors::ScanboardError;

/// Body of `POST /api/scan`. Read from raw JSON so that a missing, null or
/// mistyped field is answered with the same 400 as an empty target.
#[derive(Debug)]
pub struct StartScanRequest {
    pub target: String,
    pub scan_type: Option<String>,
}

impl StartScanRequest {
    pub fn from_json(body: &Value) -> Result<Self, ScanboardError> {
        let fields = body.as_object().ok_or_else(|| {
            ScanboardError::InvalidInput("Request body must be a JSON object".into())
        })?;

        // Null and absent both mean "no target"; validation rejects it later.
        let target = match fields.get("target") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(ScanboardError::InvalidInput("Invalid target format".into())),
        };

        let scan_type = match fields.get("scan_type") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(ScanboardError::InvalidInput("Invalid scan type".into())),
        };

        Ok(Self { target, scan_type })
    }
}

#[derive(Serialize)]
pub struct StartScanResponse {
    pub success: bool,
    pub scan_id: i64,
    pub vulnerabilities_found: usize,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_target_read_as_empty() {
        let req = StartScanRequest::from_json(&json!({})).unwrap();
        assert_eq!(req.target, "");
        assert!(req.scan_type.is_none());

        let req = StartScanRequest::from_json(&json!({"target": null, "scan_type": null})).unwrap();
        assert_eq!(req.target, "");
        assert!(req.scan_type.is_none());
    }

    #[test]
    fn test_fields_are_read_verbatim() {
        let req = StartScanRequest::from_json(&json!({"target": " a.b ", "scan_type": "web"})).unwrap();
        assert_eq!(req.target, " a.b ");
        assert_eq!(req.scan_type.as_deref(), Some("web"));
    }

    #[test]
    fn test_non_string_target_is_invalid_format() {
        let err = StartScanRequest::from_json(&json!({"target": 42})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid target format");
    }

    #[test]
    fn test_non_string_scan_type_is_rejected() {
        let err = StartScanRequest::from_json(&json!({"target": "a.b", "scan_type": [1]})).unwrap_err();
        assert!(matches!(err, ScanboardError::InvalidInput(_)));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = StartScanRequest::from_json(&json!(["a.b"])).unwrap_err();
        assert!(matches!(err, ScanboardError::InvalidInput(_)));
    }
}
