use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CustomerRecord;

/// State of the customer's record in SAP as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SapStatus {
    Found,
    SessionExpired,
    NotFound,
    Unknown,
}

impl SapStatus {
    /// Maps the `sap_status` wire value. Older backends omit the field, in
    /// which case the status follows `has_sap_record`.
    pub fn resolve(raw: Option<&str>, has_sap_record: bool) -> Self {
        match raw {
            Some("found") => SapStatus::Found,
            Some("session_expired") => SapStatus::SessionExpired,
            Some("not_found") => SapStatus::NotFound,
            Some(_) => SapStatus::Unknown,
            None if has_sap_record => SapStatus::Found,
            None => SapStatus::NotFound,
        }
    }
}

/// Successful body of `POST /api/search/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub customer_data: Value,
    #[serde(default)]
    pub sap_customer_code: Option<String>,
    #[serde(default)]
    pub has_sap_record: bool,
    #[serde(default)]
    pub sap_status: Option<String>,
    #[serde(default)]
    pub sap_error: Option<String>,
}

impl SearchResponse {
    pub fn record(&self) -> Option<CustomerRecord> {
        CustomerRecord::normalize(&self.customer_data)
    }

    /// Code only when it is a non-empty string.
    pub fn sap_code(&self) -> Option<&str> {
        self.sap_customer_code
            .as_deref()
            .filter(|code| !code.is_empty())
    }

    pub fn status(&self) -> SapStatus {
        SapStatus::resolve(self.sap_status.as_deref(), self.has_sap_record)
    }

    /// `customer_data` pretty-printed with two-space indentation.
    pub fn raw_json(&self) -> String {
        serde_json::to_string_pretty(&self.customer_data).unwrap_or_else(|_| "null".to_string())
    }
}

/// Successful body of `POST /api/generate-sap-code/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// The `error` field of a response body, if it is set to something truthy.
///
/// Empty strings, `false`, `0` and `null` do not count as errors.
pub fn explicit_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_wire() {
        assert_eq!(SapStatus::resolve(Some("found"), false), SapStatus::Found);
        assert_eq!(
            SapStatus::resolve(Some("session_expired"), true),
            SapStatus::SessionExpired
        );
        assert_eq!(SapStatus::resolve(Some("not_found"), true), SapStatus::NotFound);
        assert_eq!(SapStatus::resolve(Some("weird"), true), SapStatus::Unknown);
    }

    #[test]
    fn test_status_inferred_when_absent() {
        assert_eq!(SapStatus::resolve(None, true), SapStatus::Found);
        assert_eq!(SapStatus::resolve(None, false), SapStatus::NotFound);
    }

    #[test]
    fn test_search_response_defaults_missing_fields() {
        let response: SearchResponse =
            serde_json::from_value(json!({"success": true, "customer_data": {"A": 1}})).unwrap();
        assert!(!response.has_sap_record);
        assert_eq!(response.sap_code(), None);
        assert_eq!(response.status(), SapStatus::NotFound);
        assert!(response.record().is_some());
    }

    #[test]
    fn test_empty_code_is_absent() {
        let response = SearchResponse {
            sap_customer_code: Some(String::new()),
            has_sap_record: true,
            ..Default::default()
        };
        assert_eq!(response.sap_code(), None);
    }

    #[test]
    fn test_whitespace_code_is_kept_verbatim() {
        let response = SearchResponse {
            sap_customer_code: Some("  ".to_string()),
            has_sap_record: true,
            ..Default::default()
        };
        assert_eq!(response.sap_code(), Some("  "));
    }

    #[test]
    fn test_raw_json_is_indented() {
        let response = SearchResponse {
            customer_data: json!({"A": 1}),
            ..Default::default()
        };
        assert_eq!(response.raw_json(), "{\n  \"A\": 1\n}");
    }

    #[test]
    fn test_explicit_error() {
        assert_eq!(
            explicit_error(&json!({"error": "Failed to retrieve Autoline data"})),
            Some("Failed to retrieve Autoline data".to_string())
        );
        assert_eq!(explicit_error(&json!({"error": null, "message": "ok"})), None);
        assert_eq!(explicit_error(&json!({"error": ""})), None);
        assert_eq!(explicit_error(&json!({"message": "ok"})), None);
        assert_eq!(explicit_error(&json!({"error": true})), Some("true".to_string()));
    }
}
